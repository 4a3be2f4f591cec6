//! Tests for the AWS-backed stores.
//!
//! SDK clients are backed by `aws-smithy-mocks` rules, so the requests the
//! stores build and the responses they interpret are checked without AWS.

use aws_sdk_secretsmanager::operation::get_secret_value::{
    GetSecretValueError, GetSecretValueOutput,
};
use aws_sdk_secretsmanager::types::error::ResourceNotFoundException;
use aws_sdk_ssm::operation::get_parameter::{GetParameterError, GetParameterOutput};
use aws_sdk_ssm::types::Parameter;
use aws_sdk_ssm::types::error::ParameterNotFound;
use aws_smithy_mocks::{mock, mock_client};

use super::{
    AwsSecretStore, ParameterStore, ResolutionError, SecretStore, SecretsManager,
    extract_secret_field,
};

const PARAMETER_NAME: &str = "/secret/slack/mockSecretName";
const WEBHOOK_URL: &str = "https://mockWebhookUrl.com";

mod parameter_store {
    use super::*;

    #[tokio::test]
    async fn requests_named_parameter_with_decryption() {
        let rule = mock!(aws_sdk_ssm::Client::get_parameter)
            .match_requests(|req| {
                req.name() == Some(PARAMETER_NAME) && req.with_decryption() == Some(true)
            })
            .then_output(|| {
                GetParameterOutput::builder()
                    .parameter(Parameter::builder().value(WEBHOOK_URL).build())
                    .build()
            });
        let store = ParameterStore::new(mock_client!(aws_sdk_ssm, [&rule]));

        let value = store.fetch(PARAMETER_NAME).await.unwrap();

        assert_eq!(value, WEBHOOK_URL);
        assert_eq!(rule.num_calls(), 1);
    }

    #[tokio::test]
    async fn parameter_without_value_is_missing() {
        let rule = mock!(aws_sdk_ssm::Client::get_parameter).then_output(|| {
            GetParameterOutput::builder()
                .parameter(Parameter::builder().build())
                .build()
        });
        let store = ParameterStore::new(mock_client!(aws_sdk_ssm, [&rule]));

        let result = store.fetch(PARAMETER_NAME).await;

        assert!(matches!(
            result,
            Err(ResolutionError::MissingValue { ref name }) if name == PARAMETER_NAME
        ));
    }

    #[tokio::test]
    async fn response_without_parameter_is_missing() {
        let rule = mock!(aws_sdk_ssm::Client::get_parameter)
            .then_output(|| GetParameterOutput::builder().build());
        let store = ParameterStore::new(mock_client!(aws_sdk_ssm, [&rule]));

        let result = store.fetch(PARAMETER_NAME).await;

        assert!(matches!(result, Err(ResolutionError::MissingValue { .. })));
    }

    #[tokio::test]
    async fn client_error_reaches_caller_unchanged() {
        let rule = mock!(aws_sdk_ssm::Client::get_parameter).then_error(|| {
            GetParameterError::ParameterNotFound(
                ParameterNotFound::builder().message("ErrorCode").build(),
            )
        });
        let store = ParameterStore::new(mock_client!(aws_sdk_ssm, [&rule]));

        let err = store.fetch(PARAMETER_NAME).await.unwrap_err();

        let ResolutionError::Store { name, source } = &err else {
            panic!("Expected store error, got {err:?}");
        };
        assert_eq!(name, PARAMETER_NAME);
        let sdk_error = source
            .downcast_ref::<aws_sdk_ssm::error::SdkError<GetParameterError>>()
            .expect("source should be the SDK error");
        assert!(
            sdk_error
                .as_service_error()
                .is_some_and(GetParameterError::is_parameter_not_found)
        );
    }
}

mod secrets_manager {
    use super::*;

    fn secret_string() -> String {
        format!(r#"{{"slack_webhook_url": "{WEBHOOK_URL}"}}"#)
    }

    #[tokio::test]
    async fn requests_secret_id_and_reads_key() {
        let rule = mock!(aws_sdk_secretsmanager::Client::get_secret_value)
            .match_requests(|req| req.secret_id() == Some("mockSecretName"))
            .then_output(|| {
                GetSecretValueOutput::builder()
                    .secret_string(secret_string())
                    .build()
            });
        let store = SecretsManager::new(
            mock_client!(aws_sdk_secretsmanager, [&rule]),
            "slack_webhook_url",
        );

        let value = store.fetch("mockSecretName").await.unwrap();

        assert_eq!(value, WEBHOOK_URL);
        assert_eq!(rule.num_calls(), 1);
    }

    #[tokio::test]
    async fn secret_without_string_is_missing() {
        let rule = mock!(aws_sdk_secretsmanager::Client::get_secret_value)
            .then_output(|| GetSecretValueOutput::builder().build());
        let store = SecretsManager::new(
            mock_client!(aws_sdk_secretsmanager, [&rule]),
            "slack_webhook_url",
        );

        let result = store.fetch("mockSecretName").await;

        assert!(matches!(result, Err(ResolutionError::MissingValue { .. })));
    }

    #[tokio::test]
    async fn custom_key_is_read() {
        let rule = mock!(aws_sdk_secretsmanager::Client::get_secret_value).then_output(|| {
            GetSecretValueOutput::builder()
                .secret_string(r#"{"url": "https://hooks.example.com/x"}"#)
                .build()
        });
        let store = SecretsManager::new(mock_client!(aws_sdk_secretsmanager, [&rule]), "url");

        let value = store.fetch("mockSecretName").await.unwrap();

        assert_eq!(value, "https://hooks.example.com/x");
    }

    #[tokio::test]
    async fn client_error_reaches_caller_unchanged() {
        let rule = mock!(aws_sdk_secretsmanager::Client::get_secret_value).then_error(|| {
            GetSecretValueError::ResourceNotFoundException(
                ResourceNotFoundException::builder()
                    .message("secret not found")
                    .build(),
            )
        });
        let store = SecretsManager::new(
            mock_client!(aws_sdk_secretsmanager, [&rule]),
            "slack_webhook_url",
        );

        let err = store.fetch("mockSecretName").await.unwrap_err();

        let ResolutionError::Store { source, .. } = &err else {
            panic!("Expected store error, got {err:?}");
        };
        let sdk_error = source
            .downcast_ref::<aws_sdk_secretsmanager::error::SdkError<GetSecretValueError>>()
            .expect("source should be the SDK error");
        assert!(
            sdk_error
                .as_service_error()
                .is_some_and(GetSecretValueError::is_resource_not_found_exception)
        );
    }
}

mod aws_secret_store {
    use super::*;

    #[tokio::test]
    async fn dispatches_to_selected_backend() {
        let rule = mock!(aws_sdk_ssm::Client::get_parameter).then_output(|| {
            GetParameterOutput::builder()
                .parameter(Parameter::builder().value(WEBHOOK_URL).build())
                .build()
        });
        let store =
            AwsSecretStore::Parameter(ParameterStore::new(mock_client!(aws_sdk_ssm, [&rule])));

        let value = store.fetch(PARAMETER_NAME).await.unwrap();

        assert_eq!(value, WEBHOOK_URL);
        assert_eq!(rule.num_calls(), 1);
    }
}

mod secret_field {
    use super::*;

    #[test]
    fn reads_string_field() {
        let secret = r#"{"slack_webhook_url": "https://mockWebhookUrl.com"}"#;

        let value = extract_secret_field("mockSecretName", secret, "slack_webhook_url").unwrap();

        assert_eq!(value, WEBHOOK_URL);
    }

    #[test]
    fn missing_field_is_malformed() {
        let secret = r#"{"other": "x"}"#;

        let err = extract_secret_field("mockSecretName", secret, "slack_webhook_url").unwrap_err();

        assert!(matches!(err, ResolutionError::MalformedSecret { ref name, .. } if name == "mockSecretName"));
        assert!(err.to_string().contains("slack_webhook_url"));
    }

    #[test]
    fn non_string_field_is_malformed() {
        let secret = r#"{"slack_webhook_url": 42}"#;

        let result = extract_secret_field("s", secret, "slack_webhook_url");

        assert!(matches!(result, Err(ResolutionError::MalformedSecret { .. })));
    }

    #[test]
    fn plain_string_secret_is_malformed() {
        let result = extract_secret_field("s", WEBHOOK_URL, "slack_webhook_url");

        let err = result.unwrap_err();
        assert!(err.to_string().contains("not a JSON document"));
    }
}
