//! Behavioural checks across the stepper and the census.

use conway::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_grid(rng: &mut StdRng, width: usize, height: usize) -> Grid {
    let cells = (0..width * height)
        .map(|_| Cell::from(rng.random_bool(0.3)))
        .collect();
    Grid::from_cells(width, height, cells).unwrap()
}

fn place(grid: &mut Grid, i: isize, j: isize, rows: &[&str]) {
    for (r, text) in rows.iter().enumerate() {
        for (c, ch) in text.chars().enumerate() {
            if ch == '#' {
                grid.set_wrapped(i + r as isize, j + c as isize, Cell::Alive);
            }
        }
    }
}

const GLIDER: &[&str] = &["..#", "#.#", ".##"];

// ===========================================================================
// Stepper
// ===========================================================================

#[test]
fn dead_grid_stays_dead() {
    for (w, h) in [(1, 1), (3, 7), (16, 16)] {
        let g = Grid::new(w, h).unwrap();
        assert_eq!(step(&g), g);
    }
}

#[test]
fn step_commutes_with_toroidal_shift() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    for _ in 0..20 {
        let w = rng.random_range(3..12);
        let h = rng.random_range(3..12);
        let g = random_grid(&mut rng, w, h);
        let di = rng.random_range(-15i32..15) as isize;
        let dj = rng.random_range(-15i32..15) as isize;
        assert_eq!(step(&g.shifted(di, dj)), step(&g).shifted(di, dj));
    }
}

#[test]
fn blinker_has_period_two() {
    let mut vertical = Grid::new(9, 9).unwrap();
    place(&mut vertical, 3, 4, &["#", "#", "#"]);
    let mut horizontal = Grid::new(9, 9).unwrap();
    place(&mut horizontal, 4, 3, &["###"]);

    let once = step(&vertical);
    assert_eq!(once, horizontal);
    assert_eq!(step(&once), vertical);
}

#[test]
fn glider_moves_one_diagonal_every_four_steps() {
    let mut g = Grid::new(16, 16).unwrap();
    place(&mut g, 3, 3, GLIDER);
    let mut expected = Grid::new(16, 16).unwrap();
    place(&mut expected, 4, 4, GLIDER);
    assert_eq!(run(&g, 4), expected);
}

#[test]
fn glider_wraps_across_the_corner() {
    let mut g = Grid::new(8, 8).unwrap();
    place(&mut g, 6, 6, GLIDER);
    let mut expected = Grid::new(8, 8).unwrap();
    place(&mut expected, 7, 7, GLIDER);
    assert_eq!(run(&g, 4), expected);
    assert_eq!(run(&g, 32), g);
}

#[test]
fn next_row_agrees_with_step() {
    let mut rng = StdRng::seed_from_u64(7);
    let g = random_grid(&mut rng, 10, 13);
    let next = step(&g);
    for i in 0..g.width() {
        assert_eq!(next_row(&g, i), next.row(i));
    }
}

// ===========================================================================
// Census
// ===========================================================================

#[test]
fn glider_is_recognised_in_every_phase() {
    let mut g = Grid::new(16, 16).unwrap();
    place(&mut g, 3, 3, GLIDER);
    for generation in 0..8 {
        let r = classify(&g);
        assert_eq!(r.get(Category::Glider), 1, "generation {generation}");
        assert_eq!(r.total(), 1, "generation {generation}");
        g = step(&g);
    }
}

#[test]
fn classification_is_stable_across_parallel_runs() {
    let mut rng = StdRng::seed_from_u64(42);
    let g = random_grid(&mut rng, 40, 30);
    let g = run(&g, 30);
    let first = classify(&g);
    for _ in 0..5 {
        assert_eq!(classify(&g), first);
    }
}

#[test]
fn custom_catalog() {
    use conway::patterns::PatternDef;

    let defs = [PatternDef {
        name: "dot",
        category: Category::Block,
        rows: &["...", ".#.", "..."],
    }];
    let catalog = PatternCatalog::from_defs(&defs).unwrap();
    let mut g = Grid::new(6, 6).unwrap();
    place(&mut g, 1, 1, &["#"]);
    place(&mut g, 3, 4, &["#"]);
    let r = Classifier::new(&catalog).classify(&g);
    assert_eq!(r.get(Category::Block), 2);
}

// ===========================================================================
// Report
// ===========================================================================

#[test]
fn single_block_report() {
    let mut g = Grid::new(10, 10).unwrap();
    place(&mut g, 4, 4, &["##", "##"]);
    let result = classify(&g);
    let meta = RunMeta {
        timestamp: chrono::NaiveDate::from_ymd_opt(2025, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap(),
        width: 10,
        height: 10,
        generation: 0,
    };
    let text = render(&result, &meta);
    assert!(text.contains("Blocks:   \t1\t100\n"));
    assert!(text.contains("Gliders:   \t0\t0\n"));
    assert!(text.contains("Total:   1\n"));
}

#[test]
fn dead_grid_report_renders() {
    let g = Grid::new(10, 10).unwrap();
    let meta = RunMeta {
        timestamp: chrono::NaiveDate::from_ymd_opt(2025, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap(),
        width: 10,
        height: 10,
        generation: 5,
    };
    let mut sink = Vec::new();
    publish(&mut sink, &classify(&g), &meta).unwrap();
    let text = String::from_utf8(sink).unwrap();
    assert_eq!(text.matches("\t0\t0\n").count(), Category::COUNT);
}
