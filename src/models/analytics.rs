use serde::{Deserialize, Serialize};

/// One customer's intent summary as produced by the analytics job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyticsRecord {
    pub customer_id: String,
    pub intent_score: i64,
    pub churn_score: i64,
    pub next_best_action: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_with_exact_field_names() {
        let record = AnalyticsRecord {
            customer_id: "C1".to_string(),
            intent_score: 80,
            churn_score: 10,
            next_best_action: "call".to_string(),
        };

        assert_eq!(
            serde_json::to_string(&record).unwrap(),
            r#"{"customer_id":"C1","intent_score":80,"churn_score":10,"next_best_action":"call"}"#
        );
    }

    #[test]
    fn test_deserialize_ignores_unknown_fields() {
        let record: AnalyticsRecord = serde_json::from_str(
            r#"{"customer_id":"c002","intent_score":45,"churn_score":30,"next_best_action":"send_email","segment":"vip"}"#,
        )
        .unwrap();
        assert_eq!(record.customer_id, "c002");
        assert_eq!(record.next_best_action, "send_email");
    }

    #[test]
    fn test_deserialize_rejects_missing_field() {
        let result = serde_json::from_str::<AnalyticsRecord>(
            r#"{"customer_id":"c002","intent_score":45,"next_best_action":"send_email"}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_deserialize_rejects_non_integer_score() {
        let result = serde_json::from_str::<AnalyticsRecord>(
            r#"{"customer_id":"c002","intent_score":"high","churn_score":30,"next_best_action":"send_email"}"#,
        );
        assert!(result.is_err());
    }
}
