use crate::CHAT_MODEL;
use anyhow::Result;
use async_openai::types::{
    ChatChoice, ChatCompletionRequestMessageArgs, CreateChatCompletionRequestArgs,
    CreateImageRequestArgs, ImageData, ImageSize, ResponseFormat, Role,
};
use async_openai::Client;
use std::sync::Arc;
use std::time::Instant;

// shown when the model answers with empty content
pub const EMPTY_ADVICE: &str = "정보를 불러올 수 없습니다.";
// shown when the advice request itself fails
pub const ERROR_ADVICE: &str =
    "AI 조언을 가져오는 중 오류가 발생했습니다. 잠시 후 다시 시도해주세요.";

const SYSTEM_PROMPT: &str =
    "당신은 친절한 텃밭 가꾸기 도우미입니다. 초보자도 이해할 수 있도록 한국어로 답변해주세요.";

#[derive(Clone)]
pub struct Advisor {
    openai_client: Client,
}

impl Advisor {
    pub fn new() -> Self {
        Self {
            openai_client: Client::new(),
        }
    }

    pub async fn advise(&self, seed_name: &str) -> Result<String> {
        let start = Instant::now();
        let request = CreateChatCompletionRequestArgs::default()
            .max_tokens(600u16)
            .model(CHAT_MODEL.as_str())
            .temperature(0.7)
            .messages([
                ChatCompletionRequestMessageArgs::default()
                    .role(Role::System)
                    .content(SYSTEM_PROMPT)
                    .build()?,
                ChatCompletionRequestMessageArgs::default()
                    .role(Role::User)
                    .content(advice_prompt(seed_name))
                    .build()?,
            ])
            .build()?;
        info!("request advice for {}, wait for response...", seed_name);
        let response = self.openai_client.chat().create(request).await?;
        let elapsed = start.elapsed().as_secs_f64();
        info!("advise {} spends {}s", seed_name, elapsed);

        Ok(advice_from(response.choices))
    }

    pub async fn illustrate(&self, seed_name: &str) -> Result<Option<String>> {
        let start = Instant::now();
        let request = CreateImageRequestArgs::default()
            .prompt(image_prompt(seed_name))
            .n(1)
            .response_format(ResponseFormat::B64Json)
            .size(ImageSize::S512x512)
            .build()?;
        info!("request image for {}, wait for response...", seed_name);
        let response = self.openai_client.images().create(request).await?;
        let elapsed = start.elapsed().as_secs_f64();
        info!("illustrate {} spends {}s", seed_name, elapsed);

        Ok(image_data_uri(&response.data))
    }
}

// empty or whitespace-only answers degrade to the fallback text
fn advice_from(choices: Vec<ChatChoice>) -> String {
    choices
        .into_iter()
        .next()
        .map(|choice| choice.message.content.trim().to_string())
        .filter(|content| !content.is_empty())
        .unwrap_or_else(|| EMPTY_ADVICE.to_string())
}

fn image_data_uri(data: &[Arc<ImageData>]) -> Option<String> {
    for image in data.iter() {
        if let ImageData::B64Json(b64) = image.as_ref() {
            return Some(format!("data:image/png;base64,{}", b64));
        }
    }
    None
}

fn advice_prompt(seed_name: &str) -> String {
    format!(
        "\"{}\"라는 채소에 대해 한국어로 짧고 유용한 정보를 제공해주세요.\n\
         다음 두 가지 항목으로 나누어 답변해주세요:\n\
         1. 🌱 재배 팁 (간단한 핵심 조언 2-3문장)\n\
         2. 🍳 요리/활용법 (대표적인 활용 방법 1-2문장)\n\n\
         이모지를 적절히 사용하여 친근하게 작성해주세요. 마크다운 형식으로 출력하지 말고 일반 텍스트로 주세요.",
        seed_name
    )
}

fn image_prompt(seed_name: &str) -> String {
    format!(
        "A professional studio photo of fresh {} vegetable, white background, high quality, delicious looking",
        seed_name
    )
}
