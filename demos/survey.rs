//! Hands-on tour of the four prompt widgets.
//!
//! Run with `cargo run --example survey`. Pipe something into stdin to see
//! the line-based fallback instead of the interactive widgets.

use promptline::{confirm, input, rating, select, PromptOutcome};

fn main() -> Result<(), promptline::PromptError> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let conditions = vec![
        "caffeine".to_string(),
        "no-caffeine".to_string(),
        "exercise-first".to_string(),
    ];
    let PromptOutcome::Submitted(condition) = select("Condition for this block?", &conditions, 0)?
    else {
        eprintln!("cancelled");
        return Ok(());
    };

    let PromptOutcome::Submitted(name) = input("Experiment name?", "my-experiment")? else {
        eprintln!("cancelled");
        return Ok(());
    };

    let PromptOutcome::Submitted(focus) = rating("Focus level?", 1, 5, 3)? else {
        eprintln!("cancelled");
        return Ok(());
    };

    let PromptOutcome::Submitted(save) = confirm("Save this check-in?", true)? else {
        eprintln!("cancelled");
        return Ok(());
    };

    println!(
        "condition={} name={name} focus={focus} save={save}",
        conditions[condition]
    );
    Ok(())
}
