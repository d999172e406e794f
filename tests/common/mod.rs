use keycalc::application::engine::CalculatorEngine;
use keycalc::error::Result;
use keycalc::interfaces::keyboard::{dispatch, parse_keys};

/// Feeds one line of keys to the engine, stopping at the first error.
pub fn press(engine: &mut CalculatorEngine, line: &str) -> Result<()> {
    for key in parse_keys(line) {
        dispatch(engine, key)?;
    }
    Ok(())
}

/// Runs a whole line and returns the display afterwards.
pub fn display_after(line: &str) -> String {
    let mut engine = CalculatorEngine::default();
    press(&mut engine, line).expect("Failed to run keys");
    engine.display_string()
}
