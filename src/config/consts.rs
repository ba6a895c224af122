// src/config/consts.rs

// Net config
pub const DEFAULT_HOST: &str = "www.pro-football-reference.com";
pub const HTTP_TIMEOUT_SECS: u64 = 30;
pub const USER_AGENT: &str = concat!("pfr_stats/", env!("CARGO_PKG_VERSION"));

// Page layout
pub const CONTENT_ID: &str = "content";
pub const TABLE_CONTAINER_CLASS: &str = "table_container";
pub const OVER_HEADER_CLASS: &str = "over_header";
/// Leading header cells that carry no data column (the site's rank column).
/// Body rows hold that cell as a `th`, so it never shows up among the `td`s.
pub const LEADING_INDEX_COLUMNS: usize = 1;

// Scrape
pub const DEFAULT_YEAR: u32 = 2020;
pub const DEFAULT_OUT_DIR: &str = "output";
pub const CSV_EXT: &str = "csv";

// Plot
pub const DEFAULT_PLOT_LIMIT: usize = 50;
pub const LABEL_COLUMN: &str = "Player";

// Label declutter
pub const DECLUTTER_MAX_ITERATIONS: usize = 500;
pub const FORCE_TEXT: f64 = 0.2;
pub const FORCE_POINTS: f64 = 0.2;
pub const EXPAND_TEXT: (f64, f64) = (1.0, 1.0);
pub const EXPAND_POINTS: (f64, f64) = (1.0, 1.0);
pub const DECLUTTER_PRECISION_PX: f64 = 0.01; // total movement per pass
pub const DISPLACED_PX: f64 = 2.0;            // connector drawn beyond this

// Window
pub const WINDOW_W: f32 = 1100.0;
pub const WINDOW_H: f32 = 700.0;
pub const POINT_RADIUS_PX: f32 = 3.5;
pub const LABEL_FONT_PX: f32 = 12.0;
