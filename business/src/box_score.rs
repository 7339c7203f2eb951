//! Basketball box score shown by the box score sample.

pub const BOX_SCORE_HEADERS: [&str; 5] = ["Player", "Minutes played", "Points", "Rebounds", "Assists"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerStats {
    pub player_id: u64,
    pub player_name: String,
    pub minutes_played: u32,
    pub points: u32,
    pub rebounds: u32,
    pub assists: u32,
}

impl PlayerStats {
    fn new(
        player_id: u64,
        player_name: &str,
        minutes_played: u32,
        points: u32,
        rebounds: u32,
        assists: u32,
    ) -> Self {
        Self {
            player_id,
            player_name: player_name.to_owned(),
            minutes_played,
            points,
            rebounds,
            assists,
        }
    }

    pub fn cell_text(&self, column: usize) -> String {
        match column {
            0 => self.player_name.clone(),
            1 => self.minutes_played.to_string(),
            2 => self.points.to_string(),
            3 => self.rebounds.to_string(),
            4 => self.assists.to_string(),
            _ => String::new(),
        }
    }
}

/// A single game's stat line for the whole roster.
pub fn roster() -> Vec<PlayerStats> {
    vec![
        PlayerStats::new(1, "Keldon Johnson", 29, 25, 4, 3),
        PlayerStats::new(2, "Julian Champagnie", 19, 9, 2, 3),
        PlayerStats::new(3, "Zach Collins", 26, 16, 4, 4),
        PlayerStats::new(4, "Devin Vassell", 36, 17, 5, 7),
        PlayerStats::new(5, "Tre Jones", 32, 16, 4, 2),
        PlayerStats::new(6, "Jeremy Sochan", 34, 11, 8, 8),
        PlayerStats::new(7, "Dominic Barlow", 19, 12, 4, 2),
        PlayerStats::new(8, "Blake Wesley", 15, 9, 2, 1),
        PlayerStats::new(9, "Cedi Osman", 13, 5, 3, 1),
        PlayerStats::new(10, "Doug McDermott", 9, 0, 0, 2),
        PlayerStats::new(11, "Malaki Branham", 8, 0, 1, 0),
    ]
}
