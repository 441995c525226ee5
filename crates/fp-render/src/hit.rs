//! Hit testing: pointer position → token lookup.
//!
//! Walks the token list back to front (last painted = topmost) and returns
//! the first token whose circle contains the point.

use crate::scene::screen_point;
use fp_core::FloorConfig;
use fp_core::model::Token;
use kurbo::Point;

/// Find the topmost token at screen position (px, py).
/// Returns `None` if the point is on bare floor.
pub fn hit_test<'a>(tokens: &'a [Token], px: f64, py: f64, config: &FloorConfig) -> Option<&'a Token> {
    let pointer = Point::new(px, py);
    let hit = tokens
        .iter()
        .rev()
        .find(|t| screen_point(t, config).distance(pointer) <= config.token_radius);
    log::trace!("hit_test ({px}, {py}) -> {:?}", hit.map(|t| t.line));
    hit
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use fp_core::parser::parse_tokens;

    fn config() -> FloorConfig {
        FloorConfig::default()
    }

    #[test]
    fn hit_center() {
        let tokens = parse_tokens("100, 100, N");
        let hit = hit_test(&tokens, 100.0, 620.0, &config());
        assert_eq!(hit.map(|t| t.line.get()), Some(1));
    }

    #[test]
    fn hit_uses_screen_space() {
        // Model (100, 100) is screen (100, 620); screen (100, 100) is empty.
        let tokens = parse_tokens("100, 100, N");
        assert!(hit_test(&tokens, 100.0, 100.0, &config()).is_none());
    }

    #[test]
    fn radius_boundary_is_inclusive() {
        let tokens = parse_tokens("100, 100, N");
        assert!(hit_test(&tokens, 120.0, 620.0, &config()).is_some());
        assert!(hit_test(&tokens, 100.0, 640.0, &config()).is_some());
        assert!(hit_test(&tokens, 120.1, 620.0, &config()).is_none());
        // Inside the bounding box but outside the circle.
        assert!(hit_test(&tokens, 118.0, 638.0, &config()).is_none());
    }

    #[test]
    fn later_token_wins_overlap() {
        let tokens = parse_tokens("100, 100, N\n110, 100, S\nbad line\n105, 100, E");
        let hit = hit_test(&tokens, 105.0, 620.0, &config());
        assert_eq!(hit.map(|t| t.line.get()), Some(4));

        let only_first_two = &tokens[..2];
        let hit = hit_test(only_first_two, 105.0, 620.0, &config());
        assert_eq!(hit.map(|t| t.line.get()), Some(2));
    }

    #[test]
    fn miss_on_empty_list() {
        assert!(hit_test(&[], 0.0, 0.0, &config()).is_none());
    }
}
