use crate::table::{Ball, TargetGroup, EIGHT_BALL_ID};

/// Balls the AI may legally aim at.
///
/// Open table: every object ball. Assigned group: that group's balls, or
/// just the 8-ball once the group is cleared.
pub fn eligible_targets(balls: &[Ball], group: TargetGroup) -> Vec<&Ball> {
    let in_play = || balls.iter().filter(|b| b.is_object_ball_in_play());

    if group == TargetGroup::None {
        return in_play().collect();
    }

    let own: Vec<&Ball> = in_play().filter(|b| group.owns(b.group())).collect();
    if !own.is_empty() {
        return own;
    }

    let eight: Vec<&Ball> = in_play().filter(|b| b.id == EIGHT_BALL_ID).collect();
    if eight.is_empty() {
        log::warn!("no eligible target for {:?}: group cleared and 8-ball is down", group);
    }
    eight
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(targets: &[&Ball]) -> Vec<u8> {
        targets.iter().map(|b| b.id).collect()
    }

    fn table() -> Vec<Ball> {
        vec![
            Ball::new(0, 100.0, 100.0),
            Ball::new(2, 200.0, 100.0),
            Ball::new(5, 300.0, 100.0).pocketed(),
            Ball::new(8, 400.0, 100.0),
            Ball::new(10, 500.0, 100.0),
            Ball::new(13, 600.0, 100.0),
        ]
    }

    #[test]
    fn open_table_takes_every_object_ball() {
        assert_eq!(ids(&eligible_targets(&table(), TargetGroup::None)), vec![2, 8, 10, 13]);
    }

    #[test]
    fn assigned_group_filters() {
        assert_eq!(ids(&eligible_targets(&table(), TargetGroup::Solids)), vec![2]);
        assert_eq!(ids(&eligible_targets(&table(), TargetGroup::Stripes)), vec![10, 13]);
    }

    #[test]
    fn cleared_group_leaves_only_the_eight() {
        let mut balls = table();
        balls[1].pocketed = true;
        assert_eq!(ids(&eligible_targets(&balls, TargetGroup::Solids)), vec![8]);
    }

    #[test]
    fn cleared_group_with_eight_down_is_empty() {
        let mut balls = table();
        balls[1].pocketed = true;
        balls[3].pocketed = true;
        assert!(eligible_targets(&balls, TargetGroup::Solids).is_empty());
    }

    #[test]
    fn cue_ball_never_eligible() {
        let balls = vec![Ball::new(0, 0.0, 0.0)];
        assert!(eligible_targets(&balls, TargetGroup::None).is_empty());
    }
}
