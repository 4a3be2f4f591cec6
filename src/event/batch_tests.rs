//! Tests for the SQS event helpers.

use super::{
    SqsBatchResponse, SqsEvent, SqsMessage, UNKNOWN_MESSAGE_ID, message_id_or_unknown,
    push_failure,
};

mod sqs_event {
    use super::*;

    #[test]
    fn deserializes_lambda_sqs_event() {
        let json = r#"{
            "Records": [
                {
                    "messageId": "19dd0b57-b21e-4ac1-bd88-01bbb068cb78",
                    "receiptHandle": "MessageReceiptHandle",
                    "body": "{\"ref\": \"abc-123\"}",
                    "attributes": {
                        "ApproximateReceiveCount": "1",
                        "SentTimestamp": "1523232000000"
                    },
                    "messageAttributes": {},
                    "md5OfBody": "7b270e59b47ff90a553787216d55d91d",
                    "eventSource": "aws:sqs",
                    "eventSourceARN": "arn:aws:sqs:us-east-1:123456789012:MyQueue",
                    "awsRegion": "us-east-1"
                }
            ]
        }"#;

        let event: SqsEvent = serde_json::from_str(json).unwrap();

        assert_eq!(event.records.len(), 1);
        let record = &event.records[0];
        assert_eq!(
            message_id_or_unknown(record),
            "19dd0b57-b21e-4ac1-bd88-01bbb068cb78"
        );
        assert_eq!(record.body.as_deref(), Some(r#"{"ref": "abc-123"}"#));
    }

    #[test]
    fn record_without_body_deserializes_to_none() {
        let event: SqsEvent =
            serde_json::from_str(r#"{"Records": [{"messageId": "m-1"}]}"#).unwrap();

        assert!(event.records[0].body.is_none());
    }
}

mod message_id {
    use super::*;

    #[test]
    fn falls_back_without_message_id() {
        let record = SqsMessage::default();

        assert_eq!(message_id_or_unknown(&record), UNKNOWN_MESSAGE_ID);
    }
}

mod batch_response {
    use super::*;

    #[test]
    fn serializes_with_sqs_field_names() {
        let mut response = SqsBatchResponse::default();
        push_failure(&mut response, "m-2");

        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(
            json,
            serde_json::json!({"batchItemFailures": [{"itemIdentifier": "m-2"}]})
        );
    }

    #[test]
    fn failures_keep_push_order() {
        let mut response = SqsBatchResponse::default();
        push_failure(&mut response, "m-1");
        push_failure(&mut response, "m-3");

        let ids: Vec<&str> = response
            .batch_item_failures
            .iter()
            .map(|f| f.item_identifier.as_str())
            .collect();

        assert_eq!(ids, vec!["m-1", "m-3"]);
    }
}
