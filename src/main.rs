//! Generates the client intake questionnaire PDF.
//!
//! Fonts must be present under `assets/fonts` (or a directory named by the
//! `INTAKE_FONTS_DIR` environment variable) before running; see
//! `assets/fonts/README.md`.

use std::error::Error;

use intake_questionnaire::content;
use intake_questionnaire::render::render_questionnaire;

const OUTPUT_PATH: &str = "AI_Agent_Client_Needs_Assessment.pdf";

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {}", err);
        print_error_sources(err.as_ref());
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let questionnaire = content::questionnaire();
    let pdf = render_questionnaire(&questionnaire)?;
    let size = pdf.save(OUTPUT_PATH)?;
    println!("Document saved to: {}", OUTPUT_PATH);
    println!("File size: {} bytes", size);
    Ok(())
}

fn print_error_sources(mut error: &(dyn Error + 'static)) {
    while let Some(source) = error.source() {
        eprintln!("  caused by: {}", source);
        error = source;
    }
}
