use hangman_types::{ScoreRecord, User, UserRanking};

/// Pure ordering logic over fetched users and score records.
pub struct RankingEngine;

impl RankingEngine {
    /// Order every user with at least one finished game by win percentage,
    /// best first. Ties go to the user with more games played, then by
    /// name, so the ranking is a total order.
    pub fn leaderboard_by_win_rate(users: &[User]) -> Vec<UserRanking> {
        let mut ranked: Vec<&User> = users
            .iter()
            .filter(|user| user.total_games_played > 0)
            .collect();

        ranked.sort_by(|a, b| {
            b.win_percentage()
                .partial_cmp(&a.win_percentage())
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| b.total_games_played.cmp(&a.total_games_played))
                .then_with(|| a.name.cmp(&b.name))
        });

        ranked.into_iter().map(UserRanking::from).collect()
    }

    /// The best winning scores, fewest guesses first, truncated to `limit`.
    /// A non-positive limit yields nothing.
    pub fn top_scores(scores: &[ScoreRecord], limit: i64) -> Vec<ScoreRecord> {
        if limit <= 0 {
            return Vec::new();
        }

        let mut winning: Vec<ScoreRecord> =
            scores.iter().filter(|score| score.won).cloned().collect();
        winning.sort_by_key(|score| score.guesses);
        winning.truncate(limit as usize);
        winning
    }

    /// Arithmetic mean of attempts remaining across in-progress games;
    /// `None` when there are none.
    pub fn average_attempts_remaining(attempts: &[i32]) -> Option<f64> {
        if attempts.is_empty() {
            return None;
        }
        let total: i32 = attempts.iter().sum();
        Some(total as f64 / attempts.len() as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn user(name: &str, wins: i32, games: i32) -> User {
        User {
            id: Uuid::new_v4(),
            name: name.to_string(),
            email: None,
            wins,
            total_games_played: games,
            created_at: "2024-01-01T00:00:00Z".to_string(),
        }
    }

    fn score(user_name: &str, won: bool, guesses: i32) -> ScoreRecord {
        ScoreRecord {
            user_name: user_name.to_string(),
            date: "2024-06-01".to_string(),
            won,
            guesses,
        }
    }

    #[test]
    fn test_leaderboard_orders_by_win_rate() {
        let users = vec![
            user("alice", 1, 4),  // 25%
            user("bob", 3, 4),    // 75%
            user("carol", 2, 4),  // 50%
        ];

        let ranked = RankingEngine::leaderboard_by_win_rate(&users);
        let names: Vec<&str> = ranked.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["bob", "carol", "alice"]);
        assert_eq!(ranked[0].win_percentage, 0.75);
    }

    #[test]
    fn test_leaderboard_skips_users_without_games() {
        let users = vec![user("alice", 0, 0), user("bob", 1, 2)];
        let ranked = RankingEngine::leaderboard_by_win_rate(&users);
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].name, "bob");
    }

    #[test]
    fn test_leaderboard_tie_break() {
        // Same 50% win rate: more games ranks first, then name order.
        let users = vec![
            user("zoe", 1, 2),
            user("amy", 1, 2),
            user("max", 3, 6),
        ];

        let ranked = RankingEngine::leaderboard_by_win_rate(&users);
        let names: Vec<&str> = ranked.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["max", "amy", "zoe"]);
    }

    #[test]
    fn test_zero_games_means_zero_percentage() {
        let fresh = user("fresh", 0, 0);
        assert_eq!(fresh.win_percentage(), 0.0);
    }

    #[test]
    fn test_top_scores_filters_and_sorts() {
        let scores = vec![
            score("alice", true, 5),
            score("bob", false, 9),
            score("carol", true, 1),
            score("dave", true, 3),
        ];

        let top = RankingEngine::top_scores(&scores, 10);
        assert_eq!(top.len(), 3);
        assert!(top.iter().all(|s| s.won));
        let guesses: Vec<i32> = top.iter().map(|s| s.guesses).collect();
        assert_eq!(guesses, vec![1, 3, 5]);
    }

    #[test]
    fn test_top_scores_truncates_to_limit() {
        let scores = vec![
            score("alice", true, 5),
            score("bob", true, 2),
            score("carol", true, 8),
        ];

        let top = RankingEngine::top_scores(&scores, 2);
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].guesses, 2);
        assert_eq!(top[1].guesses, 5);
    }

    #[test]
    fn test_top_scores_non_positive_limit() {
        let scores = vec![score("alice", true, 5)];
        assert!(RankingEngine::top_scores(&scores, 0).is_empty());
        assert!(RankingEngine::top_scores(&scores, -3).is_empty());
    }

    #[test]
    fn test_average_attempts() {
        assert_eq!(RankingEngine::average_attempts_remaining(&[]), None);
        assert_eq!(RankingEngine::average_attempts_remaining(&[9]), Some(9.0));
        assert_eq!(
            RankingEngine::average_attempts_remaining(&[9, 8, 4]),
            Some(7.0)
        );
    }
}
