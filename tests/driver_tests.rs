//! End-to-end plotting through the public API.

use gridplot::errors::{LoadError, ScriptError, SourceContext};
use gridplot::render::Glyphs;
use gridplot::{Dimension, Driver, Grid, Point, plot};

const DOTS: Glyphs = Glyphs {
    mark: '#',
    blank: '.',
    separator: ' ',
};

/// Render with visible glyphs and no trailing separators, for snapshots.
fn picture(grid: &Grid) -> String {
    grid.render_with(&DOTS)
        .lines()
        .map(str::trim_end)
        .collect::<Vec<_>>()
        .join("\n")
}

fn run(source: &str) -> Driver {
    let mut driver = Driver::default();
    driver.load_source(SourceContext::new("<test>", source));
    driver.run();
    driver
}

#[test]
fn diagonal_script() {
    let driver = run("DIMENSION 4\nMOVE_TO 0 0\nLINE_TO 3 3");
    assert!(driver.diagnostics().is_empty());
    insta::assert_snapshot!(picture(driver.grid()), @r"
    # . . .
    . # . .
    . . # .
    . . . #
    ");
}

#[test]
fn degenerate_then_horizontal() {
    let driver = run("DIMENSION 3\nLINE_TO 0 0\nLINE_TO 2 0");
    assert_eq!(driver.render(), "+ + + \n      \n      \n");
}

#[test]
fn unknown_directive_does_not_stop_loading() {
    let driver = run("DIMENSION 3\nFOO 1 2\nLINE_TO 0 2\nLINE_TO 2 2");
    assert!(matches!(
        driver.diagnostics(),
        [ScriptError::UnknownCommand { line: 2, .. }]
    ));
    insta::assert_snapshot!(picture(driver.grid()), @r"
    # . .
    # . .
    # # #
    ");
}

#[test]
fn nonexistent_file_renders_blank_default_grid() {
    let mut driver = Driver::default();
    let result = driver.load_file("no/such/dir/commands.txt");
    assert!(matches!(result, Err(LoadError::Io { .. })));
    driver.run();
    assert_eq!(driver.grid().size(), Dimension::DEFAULT);
    assert_eq!(driver.render(), "          \n".repeat(5));
}

#[test]
fn box_outline() {
    let driver = run(
        "DIMENSION 5\n\
         MOVE_TO 1 1\n\
         LINE_TO 3 1\n\
         LINE_TO 3 3\n\
         LINE_TO 1 3\n\
         LINE_TO 1 1\n",
    );
    insta::assert_snapshot!(picture(driver.grid()), @r"
    . . . . .
    . # # # .
    . # . # .
    . # # # .
    . . . . .
    ");
}

#[test]
fn lines_are_clipped_at_the_edges() {
    let driver = run("DIMENSION 4\nMOVE_TO -2 -2\nLINE_TO 5 5\nMOVE_TO 10 0\nLINE_TO -10 0");
    insta::assert_snapshot!(picture(driver.grid()), @r"
    # # # #
    . # . .
    . . # .
    . . . #
    ");
}

#[test]
fn steep_and_shallow_lines() {
    let driver = run("DIMENSION 6\nLINE_TO 1 3\nMOVE_TO 2 5\nLINE_TO 5 4");
    insta::assert_snapshot!(picture(driver.grid()), @r"
    # . . . . .
    # . . . . .
    . # . . . .
    . # . . . .
    . . . . # #
    . . # # . .
    ");
}

#[test]
fn untouched_grid_is_blank() {
    for side in [1, 2, 7] {
        let grid = Grid::new(Dimension::try_new(side).unwrap());
        let rendered = grid.render();
        assert_eq!(rendered.lines().count(), side as usize);
        assert!(rendered.chars().all(|c| c == ' ' || c == '\n'));
    }
}

#[test]
fn out_of_bounds_marks_never_change_the_grid() {
    let mut grid = Grid::new(Dimension::try_new(3).unwrap());
    grid.mark(Point::new(1, 1));
    let before = grid.clone();
    for (x, y) in [(-1, 1), (1, -1), (3, 1), (1, 3), (-100, 100)] {
        grid.mark(Point::new(x, y));
    }
    assert_eq!(grid, before);
}

#[test]
fn single_point_lines_mark_one_cell() {
    for (x, y) in [(0, 0), (2, 3), (4, 4)] {
        let mut grid = Grid::default();
        grid.draw_line(Point::new(x, y), Point::new(x, y));
        assert_eq!(grid.marked().collect::<Vec<_>>(), vec![Point::new(x, y)]);
    }
}

#[test]
fn plot_returns_output_and_diagnostics() {
    let result = plot("<test>", "MOVE_TO 1\nLINE_TO 4 0");
    assert_eq!(result.diagnostics.len(), 1);
    assert_eq!(result.diagnostics[0].line(), Some(1));
    assert_eq!(result.output.lines().next(), Some("+ + + + + "));
}
