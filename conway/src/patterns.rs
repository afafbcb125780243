// patterns.rs - Shape catalog used by the classifier
//
// Every template carries the dead border it was drawn with; the border is
// part of the match. Rotations are generated once, when the catalog is built.

use std::fmt;
use std::sync::LazyLock;

use crate::error::Result;
use crate::grid::Grid;

/// Shape class reported by the census. Declaration order is report order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Glider,
    Loaf,
    Beehive,
    Block,
    Tub,
    Beacon,
    Blinker,
    Toad,
    Spaceship,
}

impl Category {
    pub const ALL: [Category; 9] = [
        Category::Glider,
        Category::Loaf,
        Category::Beehive,
        Category::Block,
        Category::Tub,
        Category::Beacon,
        Category::Blinker,
        Category::Toad,
        Category::Spaceship,
    ];

    pub const COUNT: usize = Self::ALL.len();

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            Category::Glider => "glider",
            Category::Loaf => "loaf",
            Category::Beehive => "beehive",
            Category::Block => "block",
            Category::Tub => "tub",
            Category::Beacon => "beacon",
            Category::Blinker => "blinker",
            Category::Toad => "toad",
            Category::Spaceship => "spaceship",
        }
    }

    /// Plural heading used in the report.
    pub fn label(self) -> &'static str {
        match self {
            Category::Glider => "Gliders",
            Category::Loaf => "Loafs",
            Category::Beehive => "Beehives",
            Category::Block => "Blocks",
            Category::Tub => "Tubs",
            Category::Beacon => "Beacons",
            Category::Blinker => "Blinkers",
            Category::Toad => "Toads",
            Category::Spaceship => "Spaceships",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Source bitmap for one template, `#` alive, `.` dead.
pub struct PatternDef {
    pub name: &'static str,
    pub category: Category,
    pub rows: &'static [&'static str],
}

pub const TEMPLATES: &[PatternDef] = &[
    // Four glider phases
    PatternDef {
        name: "glider",
        category: Category::Glider,
        rows: &[
            ".....",
            "...#.",
            ".#.#.",
            "..##.",
            ".....",
        ],
    },
    PatternDef {
        name: "glider-1",
        category: Category::Glider,
        rows: &[
            ".....",
            "..#..",
            "...#.",
            ".###.",
            ".....",
        ],
    },
    PatternDef {
        name: "glider-2",
        category: Category::Glider,
        rows: &[
            ".....",
            ".#.#.",
            "..##.",
            "..#..",
            ".....",
        ],
    },
    PatternDef {
        name: "glider-3",
        category: Category::Glider,
        rows: &[
            ".....",
            ".#...",
            "..##.",
            ".##..",
            ".....",
        ],
    },
    PatternDef {
        name: "loaf",
        category: Category::Loaf,
        rows: &[
            "......",
            "..##..",
            ".#..#.",
            "..#.#.",
            "...#..",
            "......",
        ],
    },
    PatternDef {
        name: "beehive",
        category: Category::Beehive,
        rows: &[
            "......",
            "..##..",
            ".#..#.",
            "..##..",
            "......",
        ],
    },
    PatternDef {
        name: "block",
        category: Category::Block,
        rows: &[
            "....",
            ".##.",
            ".##.",
            "....",
        ],
    },
    PatternDef {
        name: "tub",
        category: Category::Tub,
        rows: &[
            ".....",
            "..#..",
            ".#.#.",
            "..#..",
            ".....",
        ],
    },
    // Beacon, both phases
    PatternDef {
        name: "beacon",
        category: Category::Beacon,
        rows: &[
            "......",
            ".##...",
            ".##...",
            "...##.",
            "...##.",
            "......",
        ],
    },
    PatternDef {
        name: "beacon-1",
        category: Category::Beacon,
        rows: &[
            "......",
            ".##...",
            ".#....",
            "....#.",
            "...##.",
            "......",
        ],
    },
    PatternDef {
        name: "blinker",
        category: Category::Blinker,
        rows: &[
            "...",
            ".#.",
            ".#.",
            ".#.",
            "...",
        ],
    },
    // Toad, both phases. The first has no bottom border row.
    PatternDef {
        name: "toad",
        category: Category::Toad,
        rows: &[
            "......",
            "...#..",
            ".#..#.",
            ".#..#.",
            "..#...",
        ],
    },
    PatternDef {
        name: "toad-1",
        category: Category::Toad,
        rows: &[
            "......",
            "..###.",
            ".###..",
            "......",
        ],
    },
    PatternDef {
        name: "spaceship",
        category: Category::Spaceship,
        rows: &[
            ".......",
            ".#..#..",
            ".....#.",
            ".#...#.",
            "..####.",
            ".......",
        ],
    },
    PatternDef {
        name: "spaceship-1",
        category: Category::Spaceship,
        rows: &[
            ".......",
            "..####.",
            ".#...#.",
            ".....#.",
            ".#..#..",
            ".......",
        ],
    },
    PatternDef {
        name: "spaceship-2",
        category: Category::Spaceship,
        rows: &[
            ".......",
            "...##..",
            ".##.##.",
            ".####..",
            "..##...",
            ".......",
        ],
    },
    PatternDef {
        name: "spaceship-3",
        category: Category::Spaceship,
        rows: &[
            ".......",
            "..##...",
            ".####..",
            ".##.##.",
            "...##..",
            ".......",
        ],
    },
];

/// One base template with its distinct quarter-turn orientations. The first
/// variant is always the base bitmap.
#[derive(Debug, Clone)]
pub struct Template {
    pub name: &'static str,
    pub category: Category,
    variants: Vec<Grid>,
}

impl Template {
    pub fn from_def(def: &PatternDef) -> Result<Self> {
        let base = Grid::from_rows(def.rows)?;
        let mut variants: Vec<Grid> = Vec::with_capacity(4);
        let mut current = base;
        for _ in 0..4 {
            let next = current.rotated();
            // A rotation identical to one already held can never change a count.
            if !variants.contains(&current) {
                variants.push(current);
            }
            current = next;
        }
        Ok(Self {
            name: def.name,
            category: def.category,
            variants,
        })
    }

    pub fn variants(&self) -> &[Grid] {
        &self.variants
    }
}

#[derive(Debug, Clone)]
pub struct PatternCatalog {
    templates: Vec<Template>,
}

static STANDARD: LazyLock<PatternCatalog> = LazyLock::new(|| {
    PatternCatalog::from_defs(TEMPLATES)
        .unwrap_or_else(|e| panic!("built-in template table is malformed: {e}"))
});

impl PatternCatalog {
    /// The built-in catalog, built on first use and shared afterwards.
    pub fn standard() -> &'static PatternCatalog {
        &STANDARD
    }

    pub fn from_defs(defs: &[PatternDef]) -> Result<Self> {
        let templates = defs.iter().map(Template::from_def).collect::<Result<Vec<_>>>()?;
        tracing::debug!(
            templates = templates.len(),
            variants = templates.iter().map(|t| t.variants.len()).sum::<usize>(),
            "pattern catalog built"
        );
        Ok(Self { templates })
    }

    pub fn templates(&self) -> &[Template] {
        &self.templates
    }

    pub fn get(&self, name: &str) -> Option<&Template> {
        self.templates.iter().find(|t| t.name == name)
    }
}
