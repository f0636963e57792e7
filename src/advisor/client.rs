//! Recommendation service client
//!
//! The backend is an opaque text-in/text-out service reached over an
//! OpenRouter-compatible chat-completions endpoint. The advisor's grounding
//! is a digest of the catalog folded into the system prompt; everything else
//! about its reasoning is the service's business.

use crate::catalog::Catalog;
use crate::config::Config;
use serde::{Deserialize, Serialize};
use std::time::Duration;

const CHAT_URL: &str = "https://openrouter.ai/api/v1/chat/completions";
const MODEL: &str = "google/gemini-2.0-flash-001";
const MAX_TOKENS: u32 = 1024;

/// Hard deadline for one request. A hung connection must surface as an
/// error so the session's in-flight flag is always released.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

fn http_client() -> anyhow::Result<reqwest::Client> {
    Ok(reqwest::Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .build()?)
}

/// Get the configured advisor API key, if any.
fn api_key() -> Option<String> {
    Config::load().advisor_api_key()
}

/// Whether a service key is configured. When false the session resolves
/// submissions with a canned offline notice instead of calling out.
pub fn is_available() -> bool {
    api_key().is_some()
}

#[derive(Serialize)]
struct ChatRequest {
    model: &'static str,
    messages: Vec<Message>,
    max_tokens: u32,
    stream: bool,
}

#[derive(Serialize, Deserialize)]
struct Message {
    role: String,
    content: String,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: MessageContent,
}

#[derive(Deserialize)]
struct MessageContent {
    content: String,
}

/// Fold a one-line-per-model digest of the catalog into the advisor's
/// system prompt so recommendations stay grounded in what is actually on
/// sale.
fn system_prompt(catalog: &Catalog) -> String {
    let mut prompt = String::from(
        "你是光阳（KYMCO）车型库的选车顾问。根据下面的在售车型列表回答用户的选车问题，\
         推荐时给出车型名称、价格和一句理由。只推荐列表中的车型；\
         如果没有合适的，如实说明。回答保持简短、口语化。\n\n在售车型：\n",
    );
    for record in catalog.records() {
        prompt.push_str(&format!(
            "- {}（{}系列 · {} · ￥{}）：{}\n",
            record.name, record.series, record.category, record.price, record.description
        ));
    }
    prompt
}

/// One request, one reply. No automatic retry: a failed call surfaces as an
/// error and the session degrades to its fallback message; retry is a new
/// user-initiated submission.
pub async fn get_recommendation(catalog: &Catalog, user_text: &str) -> anyhow::Result<String> {
    let api_key = api_key().ok_or_else(|| {
        anyhow::anyhow!("未配置顾问服务密钥（SHOWROOM_API_KEY 或配置文件）")
    })?;

    let request = ChatRequest {
        model: MODEL,
        messages: vec![
            Message {
                role: "system".to_string(),
                content: system_prompt(catalog),
            },
            Message {
                role: "user".to_string(),
                content: user_text.to_string(),
            },
        ],
        max_tokens: MAX_TOKENS,
        stream: false,
    };

    let client = http_client()?;
    let response = client
        .post(CHAT_URL)
        .header("Content-Type", "application/json")
        .header("Authorization", format!("Bearer {}", api_key))
        .json(&request)
        .send()
        .await?;

    let status = response.status();
    let text = response.text().await?;

    if !status.is_success() {
        let message = match status.as_u16() {
            401 => "顾问服务密钥无效".to_string(),
            429 => "顾问服务请求过于频繁，请稍后再试".to_string(),
            500..=599 => format!("顾问服务暂时不可用（{}）", status),
            _ => format!("顾问服务返回错误 {}: {}", status, crate::util::truncate(&text, 200)),
        };
        anyhow::bail!(message);
    }

    let parsed: ChatResponse = serde_json::from_str(&text)
        .map_err(|e| anyhow::anyhow!("顾问服务响应格式异常: {}", e))?;

    let reply = parsed
        .choices
        .first()
        .map(|c| c.message.content.trim().to_string())
        .unwrap_or_default();

    if reply.is_empty() {
        anyhow::bail!("顾问服务返回了空回复");
    }

    Ok(reply)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_prompt_lists_every_model() {
        let catalog = Catalog::embedded().unwrap();
        let prompt = system_prompt(&catalog);
        for record in catalog.records() {
            assert!(prompt.contains(&record.name), "missing {}", record.name);
        }
    }

    #[test]
    fn test_http_client_carries_request_timeout() {
        // Building must succeed with the deadline configured; without one a
        // hung connection would leave the session pending forever.
        assert!(REQUEST_TIMEOUT > Duration::ZERO);
        http_client().unwrap();
    }

    #[test]
    fn test_response_shape_parses() {
        let raw = r#"{"choices":[{"message":{"role":"assistant","content":"试试 LIKE 150。"}}]}"#;
        let parsed: ChatResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(parsed.choices[0].message.content, "试试 LIKE 150。");
    }
}
