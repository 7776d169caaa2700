//! Humanizes a paragraph and prints the diff with every backend.
//!
//! Run with `cargo run -p humanize-text --example render_showcase`.

use humanize_diff::{
    AnsiBackend, DiffSymbols, HtmlBackend, MarkerBackend, RenderOptions, to_json,
};
use humanize_text::{HumanizeNormalizer, HumanizeSession, NormalizeOptions};

const PARAGRAPH: &str = "\u{201C}Honestly\u{201D} \u{2014} it\u{2019}s a great\u{00A0}question.  \n\
Let\u{2019}s delve\u{200B} into it\u{2026}";

fn main() {
    for (label, options) in [
        ("default", NormalizeOptions::default()),
        (
            "keyboard only",
            NormalizeOptions::default().with_keyboard_only(true),
        ),
    ] {
        let mut session = HumanizeSession::with_options(options);
        session.set_input(PARAGRAPH);
        session.humanize(&HumanizeNormalizer);

        println!("=== {label} ===");
        println!("{}", session.output());
        if let Some(summary) = session.change_summary() {
            println!("({summary})");
        }

        let Some(view) = session.diff() else {
            continue;
        };

        println!("\n--- ansi");
        println!(
            "{}",
            view.render(&RenderOptions::default().with_reveal_invisible(true))
        );

        println!("\n--- markers");
        println!("{view}");

        println!("\n--- critic markup");
        println!(
            "{}",
            view.render(&RenderOptions::with_backend(MarkerBackend::new(
                DiffSymbols::CRITIC
            )))
        );

        println!("\n--- html");
        println!(
            "{}",
            view.render(
                &RenderOptions::with_backend(HtmlBackend::default()).with_reveal_invisible(true)
            )
        );

        println!("\n--- ansi, github colors");
        println!(
            "{}",
            view.render(&RenderOptions::with_backend(AnsiBackend::new(
                humanize_diff::DiffTheme::GITHUB_LIGHT
            )))
        );

        match to_json(view.segments()) {
            Ok(json) => println!("\n--- json\n{json}\n"),
            Err(err) => eprintln!("could not encode diff: {err}"),
        }
    }
}
