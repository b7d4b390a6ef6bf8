use thiserror::Error;

/// 模型服务调用错误
#[derive(Debug, Error)]
pub enum LlmError {
    #[error("Missing {env_var} environment variable ({provider} API key)")]
    MissingCredential {
        provider: &'static str,
        env_var: &'static str,
    },

    #[error("{provider} request failed: {message}")]
    Transport {
        provider: &'static str,
        message: String,
    },

    #[error("{provider} returned HTTP {status}: {body}")]
    Status {
        provider: &'static str,
        status: u16,
        body: String,
    },

    #[error("{provider} response did not match the expected schema: {message}")]
    Decode {
        provider: &'static str,
        message: String,
    },

    #[error("{provider} response contained no choices")]
    EmptyChoices { provider: &'static str },

    #[error("guide generation failed: {message}")]
    Synthesis { message: String },
}
