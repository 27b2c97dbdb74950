//! Unit tests for lem-core primitives.

#[cfg(test)]
mod ids {
    use crate::{NodeId, RouteId, TokenId};

    #[test]
    fn index_roundtrip() {
        let id = NodeId(42);
        assert_eq!(id.index(), 42);
    }

    #[test]
    fn ordering() {
        assert!(RouteId(0) < RouteId(1));
        assert!(TokenId(100) > TokenId(99));
    }

    #[test]
    fn invalid_sentinels_are_max() {
        assert_eq!(NodeId::INVALID.0, u32::MAX);
        assert_eq!(RouteId::INVALID.0, u32::MAX);
        assert_ne!(TokenId::FIRST, TokenId::INVALID);
    }

    #[test]
    fn tokens_start_at_one() {
        assert_eq!(TokenId::FIRST.0, 1);
    }

    #[test]
    fn display() {
        assert_eq!(TokenId(4).to_string(), "L4");
        assert_eq!(RouteId(7).to_string(), "route #7");
        assert_eq!(NodeId(0).to_string(), "room #0");
    }
}

#[cfg(test)]
mod turn {
    use crate::Turn;

    #[test]
    fn next_and_since() {
        let t = Turn::ZERO.next().next();
        assert_eq!(t, Turn(2));
        assert_eq!(t.since(Turn(1)), 1);
        assert_eq!(Turn(3) + 4, Turn(7));
    }

    #[test]
    fn display() {
        assert_eq!(Turn(5).to_string(), "Turn 5");
    }
}

#[cfg(test)]
mod config {
    use crate::{LemError, RunConfig};

    #[test]
    fn defaults() {
        let c = RunConfig::new(10);
        assert_eq!(c.token_count, 10);
        assert_eq!(c.turn_limit, None);
        assert!(c.record_trace);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn zero_turn_limit_rejected() {
        let c = RunConfig::new(1).with_turn_limit(0);
        assert!(matches!(c.validate(), Err(LemError::Config(_))));
    }

    #[test]
    fn builder_style_setters() {
        let c = RunConfig::new(3).with_turn_limit(50).without_trace();
        assert_eq!(c.turn_limit, Some(50));
        assert!(!c.record_trace);
    }
}
