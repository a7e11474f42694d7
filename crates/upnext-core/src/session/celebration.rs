//! Milestone celebrations

/// Shown every ten completions, cycling
pub const MESSAGES: [&str; 5] = [
    "Amazing! You're on fire!",
    "Incredible progress!",
    "You're crushing it!",
    "Productivity champion!",
    "Keep up the great work!",
];

pub const MILESTONE_INTERVAL: u64 = 10;

pub fn is_milestone(total_completed: u64) -> bool {
    total_completed > 0 && total_completed % MILESTONE_INTERVAL == 0
}

/// Message for a lifetime completion count, if it is a milestone
pub fn message_for(total_completed: u64) -> Option<&'static str> {
    if !is_milestone(total_completed) {
        return None;
    }
    let index = ((total_completed / MILESTONE_INTERVAL - 1) % MESSAGES.len() as u64) as usize;
    Some(MESSAGES[index])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_milestones() {
        assert!(!is_milestone(0));
        assert!(!is_milestone(9));
        assert!(is_milestone(10));
        assert!(!is_milestone(11));
        assert!(is_milestone(40));
    }

    #[test]
    fn test_messages_cycle() {
        assert_eq!(message_for(10), Some("Amazing! You're on fire!"));
        assert_eq!(message_for(20), Some("Incredible progress!"));
        assert_eq!(message_for(50), Some("Keep up the great work!"));
        assert_eq!(message_for(60), Some("Amazing! You're on fire!"));
        assert_eq!(message_for(15), None);
    }
}
