use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub circuits: CircuitsConfig,
    #[serde(default)]
    pub rushhour: RushHourConfig,
    #[serde(default)]
    pub timetable: TimetableConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            circuits: CircuitsConfig::default(),
            rushhour: RushHourConfig::default(),
            timetable: TimetableConfig::default(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CircuitsConfig {
    #[serde(default = "default_circuits_data_dir")]
    pub data_dir: String,
    #[serde(default = "default_output_file")]
    pub output_file: String,
}

impl Default for CircuitsConfig {
    fn default() -> Self {
        Self {
            data_dir: default_circuits_data_dir(),
            output_file: default_output_file(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct RushHourConfig {
    #[serde(default = "default_board_file")]
    pub board_file: String,
    #[serde(default = "default_board_size")]
    pub board_size: usize,
    #[serde(default = "default_output_file")]
    pub output_file: String,
}

impl Default for RushHourConfig {
    fn default() -> Self {
        Self {
            board_file: default_board_file(),
            board_size: default_board_size(),
            output_file: default_output_file(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct TimetableConfig {
    #[serde(default = "default_output_file")]
    pub schedule_file: String,
    #[serde(default = "default_courses_file")]
    pub courses_file: String,
    #[serde(default = "default_rooms_file")]
    pub rooms_file: String,
    #[serde(default = "default_evening_slot")]
    pub evening_slot: i64,
}

impl Default for TimetableConfig {
    fn default() -> Self {
        Self {
            schedule_file: default_output_file(),
            courses_file: default_courses_file(),
            rooms_file: default_rooms_file(),
            evening_slot: default_evening_slot(),
        }
    }
}

fn default_circuits_data_dir() -> String {
    "data".to_string()
}

fn default_output_file() -> String {
    "output.csv".to_string()
}

fn default_board_file() -> String {
    "board.csv".to_string()
}

fn default_board_size() -> usize {
    6
}

fn default_courses_file() -> String {
    "vakken.csv".to_string()
}

fn default_rooms_file() -> String {
    "zalen.csv".to_string()
}

fn default_evening_slot() -> i64 {
    17
}
