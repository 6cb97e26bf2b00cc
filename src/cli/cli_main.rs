use crate::Dashboard::dashboard_main::{Dashboard, SUBMIT_SUCCESS};
use crate::Dashboard::input_form::ReactionInput;
use crate::settings::SimulatorConfig;
use std::io::{self, BufRead, Write};
use std::path::Path;

const CHART_WIDTH: usize = 40;
const DEFAULT_CSV_FILE: &str = "chemical_reactions.csv";

/// runs the menu on stdin/stdout
pub fn run_interactive_menu(
    dashboard: &mut Dashboard,
    config: &SimulatorConfig,
) -> io::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_menu(dashboard, config, &mut stdin.lock(), &mut stdout.lock())
}

/* colors
Blue (\x1b[34m) - Welcome header text

Yellow (\x1b[33m) - Menu options

Cyan (\x1b[36m) - prompts

Red (\x1b[31m) - warnings

Green (\x1b[32m) - success messages

Reset (\x1b[0m) - Returns to normal color after each colored section
*/
pub fn run_menu<R: BufRead, W: Write>(
    dashboard: &mut Dashboard,
    config: &SimulatorConfig,
    input: &mut R,
    out: &mut W,
) -> io::Result<()> {
    writeln!(out, "\x1b[34m\n ⚗️ Chemical Reaction Simulator \n\x1b[0m")?;
    loop {
        show_main_menu(out, dashboard.is_enriched())?;
        // end of input closes the menu like "0"
        let Some(choice) = read_line(input)? else {
            break;
        };
        match choice.trim() {
            "1" => add_reaction_menu(dashboard, config, input, out)?,
            "2" => write!(out, "{}", dashboard.render_table())?,
            "3" => match dashboard.render_charts(CHART_WIDTH) {
                Ok(charts) => write!(out, "{}", charts)?,
                Err(e) => warn(out, &e.to_string())?,
            },
            "4" => compound_menu(dashboard, input, out)?,
            "5" => export_menu(dashboard, input, out)?,
            "6" => write!(out, "{}", dashboard.render_known_reactions())?,
            "0" => {
                writeln!(out, "Goodbye!")?;
                break;
            }
            _ => writeln!(out, "Invalid choice. Please try again.")?,
        }
    }
    Ok(())
}

fn show_main_menu<W: Write>(out: &mut W, enriched: bool) -> io::Result<()> {
    writeln!(out, "\x1b[33m1. Add reaction\x1b[0m")?;
    writeln!(out, "\x1b[33m2. Reaction predictions table\x1b[0m")?;
    writeln!(out, "\x1b[33m3. Reaction visualizations\x1b[0m")?;
    if enriched {
        writeln!(out, "\x1b[33m4. Compound information (PubChem, Wikipedia)\x1b[0m")?;
    }
    writeln!(out, "\x1b[33m5. Export CSV\x1b[0m")?;
    writeln!(out, "\x1b[33m6. Known reactions\x1b[0m")?;
    writeln!(out, "\x1b[33m0. Exit\x1b[0m")?;
    write!(out, "\x1b[36mEnter your choice: \x1b[0m")?;
    out.flush()
}

fn add_reaction_menu<R: BufRead, W: Write>(
    dashboard: &mut Dashboard,
    config: &SimulatorConfig,
    input: &mut R,
    out: &mut W,
) -> io::Result<()> {
    let reactants = prompt(input, out, "Reactants (e.g., H2 + O2)")?;
    let temperature = prompt(
        input,
        out,
        &format!("Temperature (°C) [{}]", config.default_temperature),
    )?;
    let pressure = prompt(
        input,
        out,
        &format!("Pressure (atm) [{}]", config.default_pressure),
    )?;
    let catalyst = prompt(input, out, "Catalyst (optional)")?;
    let form = ReactionInput::from_fields(
        &reactants,
        &temperature,
        &pressure,
        &catalyst,
        config.default_temperature,
        config.default_pressure,
    );
    match form.and_then(|form| dashboard.submit(form).map(|_| ())) {
        Ok(()) => writeln!(out, "\x1b[32m{}\x1b[0m", SUBMIT_SUCCESS),
        Err(e) => warn(out, &e.to_string()),
    }
}

fn compound_menu<R: BufRead, W: Write>(
    dashboard: &Dashboard,
    input: &mut R,
    out: &mut W,
) -> io::Result<()> {
    if !dashboard.is_enriched() {
        return writeln!(out, "Invalid choice. Please try again.");
    }
    if dashboard.table().is_empty() {
        return warn(out, "No reactions yet.");
    }
    let answer = prompt(
        input,
        out,
        &format!("Reaction number (1-{})", dashboard.table().len()),
    )?;
    let panel = answer
        .trim()
        .parse::<usize>()
        .ok()
        .filter(|n| *n >= 1)
        .and_then(|n| dashboard.enrich_row(n - 1));
    match panel {
        Some(panel) => write!(out, "{}", panel.render()),
        None => warn(out, &format!("No reaction number '{}'", answer.trim())),
    }
}

fn export_menu<R: BufRead, W: Write>(
    dashboard: &Dashboard,
    input: &mut R,
    out: &mut W,
) -> io::Result<()> {
    let answer = prompt(input, out, &format!("File name [{}]", DEFAULT_CSV_FILE))?;
    let file_name = match answer.trim() {
        "" => DEFAULT_CSV_FILE,
        name => name,
    };
    match dashboard.export_csv_to(Path::new(file_name)) {
        Ok(()) => writeln!(
            out,
            "\x1b[32m{} reactions saved to {}\x1b[0m",
            dashboard.table().len(),
            file_name
        ),
        Err(e) => warn(out, &e.to_string()),
    }
}

fn warn<W: Write>(out: &mut W, message: &str) -> io::Result<()> {
    writeln!(out, "\x1b[31m{}\x1b[0m", message)
}

/// prints the prompt and reads one line without the line ending; end of input gives ""
fn prompt<R: BufRead, W: Write>(input: &mut R, out: &mut W, label: &str) -> io::Result<String> {
    write!(out, "\x1b[36m{}: \x1b[0m", label)?;
    out.flush()?;
    Ok(read_line(input)?.unwrap_or_default())
}

fn read_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}
