//! Daily advice command.
//!
//! Fetches the day plan from the advice service and prints the summary
//! plus the suggestion chips. Chips can then be toggled into the session
//! selection with `select toggle`.

use cyclesync_core::advice::{AdviceGateway, AdviceKey, AdviceSlot};

use super::{require_profile, resolve_today, stats_for};

pub fn run(today: Option<String>) -> Result<(), Box<dyn std::error::Error>> {
    let profile = require_profile()?;
    let today = resolve_today(today)?;
    let stats = stats_for(&profile, today);

    let gateway = AdviceGateway::from_env()?;
    let mut slot = AdviceSlot::new();
    let key = AdviceKey::from(&stats);
    slot.issue(key);

    let runtime = tokio::runtime::Runtime::new()?;
    let fetched = runtime.block_on(gateway.fetch_day_plan(&profile, &stats))?;
    slot.accept(key, fetched);
    let Some(plan) = slot.current() else {
        return Ok(());
    };
    println!("{} Phase -- Day {}", stats.phase, stats.current_day);
    println!();
    println!("\"{}\"", plan.summary);
    println!("Mood forecast: {}", plan.mood_forecast);
    println!();
    println!("Work & Study: {}", plan.productivity_hack);
    println!("Movement:     {}", plan.workout_recommendation);
    println!("Nutrition:    {}", plan.nutrition_tip);
    println!("Self care:    {}", plan.self_care_action);
    println!();
    println!("Suggestions (toggle with 'select toggle <category> <text>'):");
    print_chips("work", &plan.recommendations.work);
    print_chips("movement", &plan.recommendations.movement);
    print_chips("nutrition", &plan.recommendations.nutrition);
    print_chips("selfcare", &plan.recommendations.selfcare);
    println!();
    println!(
        "Upcoming in {} day(s): {} -- {}",
        plan.upcoming_event.days_offset, plan.upcoming_event.title, plan.upcoming_event.description
    );
    Ok(())
}

fn print_chips(category: &str, chips: &[String]) {
    for chip in chips {
        println!("  [{category}] {chip}");
    }
}
