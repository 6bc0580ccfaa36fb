use linebar::{
    BarChar, BarConfig, BarOption, InMemoryTerm, ProgressBar, ProgressDrawTarget, Region,
    WidthMode, OVERHEAD,
};
use pretty_assertions::assert_eq;

fn bar_on(in_mem: &InMemoryTerm, config: BarConfig) -> ProgressBar {
    ProgressBar::with_draw_target(config, ProgressDrawTarget::term_like(Box::new(in_mem.clone())))
}

#[test]
fn full_sequence_without_terminal() {
    let in_mem = InMemoryTerm::piped();
    let pb = bar_on(&in_mem, BarConfig::new([BarOption::Width(10)]).unwrap());

    for progress in [0.0, 0.5, 1.0] {
        pb.draw(progress);
    }
    pb.success();

    assert_eq!(
        in_mem.output(),
        concat!(
            "\r[          ] 0%",
            "\r[=====     ] 50%",
            "\r\x1b[32m[==========] 100%\x1b[0m\n",
            "\x1b[32mSuccess: Operation successful\x1b[0m\n",
        )
    );
}

#[test]
fn empty_and_full_bars_for_every_glyph_pair() {
    for complete in Region::Complete.chars() {
        for incomplete in Region::Incomplete.chars() {
            if complete == incomplete {
                continue;
            }
            let config = BarConfig::new([
                BarOption::Width(6),
                BarOption::CompleteChar(complete.as_char()),
                BarOption::IncompleteChar(incomplete.as_char()),
            ])
            .unwrap();
            let pb = bar_on(&InMemoryTerm::piped(), config);

            let empty = incomplete.to_string().repeat(6);
            let full = complete.to_string().repeat(6);
            assert_eq!(pb.render_line(0.0), format!("\r[{}] 0%", empty));
            assert_eq!(
                pb.render_line(1.0),
                format!("\r\x1b[32m[{}] 100%\x1b[0m\n", full)
            );
        }
    }
}

#[test]
fn adaptive_width_follows_terminal() {
    for cols in 1..=120u16 {
        let in_mem = InMemoryTerm::new(24, cols);
        let pb = bar_on(&in_mem, BarConfig::default());

        let available = i32::from(cols) - i32::from(OVERHEAD);
        let expected = if available < BarConfig::DEFAULT_WIDTH {
            available.max(1) as usize
        } else {
            BarConfig::DEFAULT_WIDTH as usize
        };
        assert_eq!(pb.bar_width(), expected, "cols = {}", cols);

        // Whenever the terminal leaves room for a body, the whole line fits.
        if available >= 1 {
            let line = pb.render_line(0.99);
            let visible = console::measure_text_width(line.trim_start_matches('\r'));
            assert!(visible <= cols as usize, "cols = {}: {:?}", cols, line);
        }
    }
}

#[test]
fn fixed_width_ignores_terminal() {
    let in_mem = InMemoryTerm::new(24, 20);
    let pb = bar_on(&in_mem, BarConfig::default()).with_width_mode(WidthMode::Fixed);
    assert_eq!(pb.width_mode(), WidthMode::Fixed);

    pb.draw(0.5);
    let expected = format!("\r[{}{}] 50%", "=".repeat(25), " ".repeat(25));
    assert_eq!(in_mem.output(), expected);
}

#[test]
fn default_config_is_valid() {
    let config = BarConfig::default();
    assert_eq!(config.complete_char(), BarChar::Equal);
    assert_eq!(config.incomplete_char(), BarChar::Space);
    assert_eq!(ProgressBar::hidden(config).bar_width(), 50);
}
