// src/analytics.rs
//
// Flattens per-user answers and activity logs into tabular records for
// downstream reporting. One record per answer, paired with the most recent
// log for that answer's question; answers with no matching log are skipped,
// as are users with no answers or no logs for the quiz.

use serde::Serialize;
use sqlx::PgPool;

use crate::models::answer::AnswerDetail;
use crate::models::log::Log;
use crate::repos;

/// Denormalized reporting row combining user, answer, question and log data.
#[derive(Debug, Clone, Serialize)]
pub struct FlatRecord {
    pub user_id: i64,
    pub answer: Option<String>,
    pub question: String,
    pub correct_answer: String,
    pub log_action: String,
    pub log_time: chrono::DateTime<chrono::Utc>,
}

/// Pairs each answer with the most recent log for its question.
pub fn flatten(user_id: i64, answers: &[AnswerDetail], logs: &[Log]) -> Vec<FlatRecord> {
    let mut records = Vec::new();

    for answer in answers {
        let latest = logs
            .iter()
            .filter(|log| log.question_id == answer.question_id)
            .max_by_key(|log| log.time);

        let Some(log) = latest else {
            continue;
        };

        records.push(FlatRecord {
            user_id,
            answer: answer.answer.clone(),
            question: answer.question.clone(),
            correct_answer: answer.correct_answer.clone(),
            log_action: log.action.clone(),
            log_time: log.time,
        });
    }

    records
}

/// Builds the flat record set for one quiz, optionally narrowed to one user.
///
/// A missing user, a user with zero answers for the quiz, or zero matching
/// logs all contribute an empty set rather than an error.
pub async fn aggregate(
    pool: &PgPool,
    quiz_id: i64,
    skip: i64,
    limit: i64,
    user_id: Option<i64>,
) -> Result<Vec<FlatRecord>, sqlx::Error> {
    let mut records = Vec::new();

    if let Some(user_id) = user_id {
        let Some(user) = repos::users::get_by_id(pool, user_id).await? else {
            return Ok(records);
        };

        let answers =
            repos::answers::list_by_user_and_quiz(pool, user.id, quiz_id, skip, limit).await?;
        if answers.is_empty() {
            return Ok(records);
        }

        let logs = repos::logs::list_by_user(pool, user.id, None, skip, limit).await?;
        if logs.is_empty() {
            return Ok(records);
        }

        records.extend(flatten(user.id, &answers, &logs));
    } else {
        // Fan out over every user; users without answers or logs for this
        // quiz are silently skipped.
        let users = repos::users::list_all(pool).await?;

        for user in users {
            let answers =
                repos::answers::list_by_user_and_quiz(pool, user.id, quiz_id, skip, limit).await?;
            if answers.is_empty() {
                continue;
            }

            for answer in &answers {
                let logs = repos::logs::list_by_user(
                    pool,
                    user.id,
                    Some(answer.question_id),
                    0,
                    limit,
                )
                .await?;
                if logs.is_empty() {
                    continue;
                }

                records.extend(flatten(user.id, std::slice::from_ref(answer), &logs));
            }
        }
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn answer(question_id: i64, text: &str) -> AnswerDetail {
        AnswerDetail {
            question_id,
            user_id: 1,
            quiz_id: 1,
            answer: Some(text.to_string()),
            marks_achieved: None,
            question: format!("question {question_id}"),
            correct_answer: "42".to_string(),
            total_marks: 5,
        }
    }

    fn log(question_id: i64, action: &str, secs: i64) -> Log {
        Log {
            id: 0,
            user_id: 1,
            question_id,
            action: action.to_string(),
            time: Utc.timestamp_opt(secs, 0).unwrap(),
        }
    }

    #[test]
    fn empty_answers_yield_no_records() {
        assert!(flatten(1, &[], &[log(1, "started", 0)]).is_empty());
    }

    #[test]
    fn answers_without_matching_logs_are_skipped() {
        let answers = vec![answer(1, "a"), answer(2, "b")];
        let logs = vec![log(2, "completed", 10)];

        let records = flatten(1, &answers, &logs);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].question, "question 2");
        assert_eq!(records[0].log_action, "completed");
    }

    #[test]
    fn one_record_per_answer_with_latest_log() {
        let answers = vec![answer(1, "a"), answer(2, "b")];
        let logs = vec![
            log(1, "started", 0),
            log(1, "completed", 100),
            log(2, "started", 5),
        ];

        let records = flatten(1, &answers, &logs);
        assert_eq!(records.len(), 2);
        // The most recent log wins, not the first seen.
        assert_eq!(records[0].log_action, "completed");
        assert_eq!(records[0].log_time, Utc.timestamp_opt(100, 0).unwrap());
        assert_eq!(records[1].log_action, "started");
    }
}
