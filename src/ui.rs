//! DOM-facing names and HUD text

use crate::sim::Screen;

pub const START_BUTTON_ID: &str = "start-btn";
pub const RESTART_BUTTON_ID: &str = "restart-btn";
pub const CANVAS_ID: &str = "game-canvas";
pub const SCORE_ID: &str = "score";
pub const TIMER_ID: &str = "timer";
/// Toy buttons carry their kind in `data-toy`
pub const TOY_BUTTON_SELECTOR: &str = ".toy-btn";

impl Screen {
    pub const ALL: [Screen; 3] = [Screen::Logo, Screen::ToySelect, Screen::Game];

    /// Id of the element holding this screen
    pub fn element_id(&self) -> &'static str {
        match self {
            Screen::Logo => "logo-screen",
            Screen::ToySelect => "toy-select-screen",
            Screen::Game => "game-screen",
        }
    }
}

/// Visibility of every screen when `active` is shown
pub fn screen_visibility(active: Screen) -> [(Screen, bool); 3] {
    Screen::ALL.map(|s| (s, s == active))
}

/// Values shown in the HUD
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hud {
    pub score: u32,
    pub time_remaining: u32,
    pub restart_visible: bool,
}

impl Hud {
    pub fn score_text(&self) -> String {
        format!("score: {}", self.score)
    }

    pub fn time_text(&self) -> String {
        format!("time: {}", self.time_remaining)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exactly_one_screen_visible() {
        for active in Screen::ALL {
            let vis = screen_visibility(active);
            assert_eq!(vis.iter().filter(|(_, v)| *v).count(), 1);
            assert!(vis.contains(&(active, true)));
        }
    }

    #[test]
    fn test_hud_text() {
        let hud = Hud {
            score: 7,
            time_remaining: 12,
            restart_visible: false,
        };
        assert_eq!(hud.score_text(), "score: 7");
        assert_eq!(hud.time_text(), "time: 12");
    }
}
