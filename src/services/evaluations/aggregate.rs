//! 评分聚合：纯函数，供详情与教师汇总两处复用。

use std::collections::BTreeMap;

use crate::models::evaluations::responses::CriterionAverage;
use crate::models::questions::entities::{Criterion, Question};

/// 保留两位小数
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// 全部评分的总平均；空输入为 0.0
pub fn overall_average(rows: &[(i64, i32)]) -> f64 {
    if rows.is_empty() {
        return 0.0;
    }
    let sum: i64 = rows.iter().map(|(_, v)| i64::from(*v)).sum();
    round2(sum as f64 / rows.len() as f64)
}

/// 按评价维度分组求平均，维度按 criteria_id 升序输出。
/// rows 为 (question_id, score_value)；题目无法归属维度时忽略该行。
pub fn criteria_averages(
    rows: &[(i64, i32)],
    questions: &[Question],
    criteria: &[Criterion],
) -> Vec<CriterionAverage> {
    let question_criteria: BTreeMap<i64, i64> =
        questions.iter().map(|q| (q.id, q.criteria_id)).collect();
    let criteria_names: BTreeMap<i64, &str> = criteria
        .iter()
        .map(|c| (c.id, c.criteria_name.as_str()))
        .collect();

    // BTreeMap 保证 criteria_id 升序
    let mut buckets: BTreeMap<i64, (i64, i64)> = BTreeMap::new();
    for (question_id, value) in rows {
        let Some(criteria_id) = question_criteria.get(question_id) else {
            continue;
        };
        let bucket = buckets.entry(*criteria_id).or_insert((0, 0));
        bucket.0 += i64::from(*value);
        bucket.1 += 1;
    }

    buckets
        .into_iter()
        .map(|(criteria_id, (sum, count))| CriterionAverage {
            criteria_id,
            criteria_name: criteria_names
                .get(&criteria_id)
                .map(|name| (*name).to_string())
                .unwrap_or_default(),
            average: round2(sum as f64 / count as f64),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(id: i64, criteria_id: i64) -> Question {
        Question {
            id,
            criteria_id,
            question_text: format!("Q{id}"),
            display_order: id as i32,
            is_active: true,
        }
    }

    fn criterion(id: i64, name: &str) -> Criterion {
        Criterion {
            id,
            criteria_name: name.to_string(),
            display_order: id as i32,
        }
    }

    #[test]
    fn test_round2() {
        assert_eq!(round2(3.333333), 3.33);
        assert_eq!(round2(3.335), 3.34);
        assert_eq!(round2(4.0), 4.0);
    }

    #[test]
    fn test_overall_average_empty_is_zero() {
        assert_eq!(overall_average(&[]), 0.0);
    }

    #[test]
    fn test_overall_average_rounds_to_two_decimals() {
        // (5 + 4 + 4) / 3 = 4.333...
        let rows = vec![(1, 5), (2, 4), (3, 4)];
        assert_eq!(overall_average(&rows), 4.33);
    }

    #[test]
    fn test_criteria_averages_grouped_and_sorted() {
        let questions = vec![question(1, 20), question(2, 20), question(3, 10)];
        let criteria = vec![criterion(20, "教学方法"), criterion(10, "专业素养")];
        let rows = vec![(1, 5), (2, 4), (3, 3)];

        let result = criteria_averages(&rows, &questions, &criteria);
        assert_eq!(result.len(), 2);
        // criteria_id 升序
        assert_eq!(result[0].criteria_id, 10);
        assert_eq!(result[0].criteria_name, "专业素养");
        assert_eq!(result[0].average, 3.0);
        assert_eq!(result[1].criteria_id, 20);
        assert_eq!(result[1].average, 4.5);
    }

    #[test]
    fn test_criteria_averages_ignores_unknown_question() {
        let questions = vec![question(1, 10)];
        let criteria = vec![criterion(10, "专业素养")];
        // question 99 不在题目表里
        let rows = vec![(1, 4), (99, 1)];

        let result = criteria_averages(&rows, &questions, &criteria);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].average, 4.0);
    }

    #[test]
    fn test_criteria_averages_empty_rows() {
        let questions = vec![question(1, 10)];
        let criteria = vec![criterion(10, "专业素养")];
        assert!(criteria_averages(&[], &questions, &criteria).is_empty());
    }
}
