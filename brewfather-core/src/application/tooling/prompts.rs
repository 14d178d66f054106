use serde::Serialize;

pub const SUGGEST_BEER_STYLES: &str = "suggest_beer_styles";

const PERSONA: &str = "You are an experienced homebrewer with deep knowledge of the brewing process \
at homebrewer level, ingredients and styles. You are not focused on giving a full recipe, just an \
overview of what styles are possible based on ingredients we already have in the inventory and by \
acquiring extra ingredients. Try to optimize the usage of the ingredients on inventory but don't go \
out of the style, suggest acquiring new ingredients to stay inside the style guidelines.";

const QUESTION: &str = "What are the styles I can brew with my Brewfather inventory? \
Don't be limit to the items in the inventory, but try to use as much as possible from the inventory. \
Use styles from the latest BJCP.";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PromptDescriptor {
    pub name: &'static str,
    pub description: &'static str,
    pub arguments: Vec<PromptArgument>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PromptArgument {
    pub name: &'static str,
    pub description: &'static str,
    pub required: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum PromptContent {
    Text { text: String },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PromptMessage {
    pub role: &'static str,
    pub content: PromptContent,
}

impl PromptMessage {
    fn text(role: &'static str, text: &str) -> Self {
        Self {
            role,
            content: PromptContent::Text {
                text: text.to_string(),
            },
        }
    }
}

/// Result of `prompts/get`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PromptResult {
    pub description: &'static str,
    pub messages: Vec<PromptMessage>,
}

fn suggest_beer_styles() -> PromptDescriptor {
    PromptDescriptor {
        name: SUGGEST_BEER_STYLES,
        description: "Ask to list all the possible BJCP styles based on the inventory.",
        arguments: Vec::new(),
    }
}

pub fn prompt_descriptors() -> Vec<PromptDescriptor> {
    vec![suggest_beer_styles()]
}

pub fn get_prompt(name: &str) -> Option<PromptResult> {
    match name {
        SUGGEST_BEER_STYLES => Some(PromptResult {
            description: suggest_beer_styles().description,
            messages: vec![
                PromptMessage::text("assistant", PERSONA),
                PromptMessage::text("user", QUESTION),
            ],
        }),
        _ => None,
    }
}
