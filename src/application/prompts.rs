use crate::domain::LanguageCode;

const SUMMARIZE_TEMPLATE: &str = "\
Summarize the following text in a clear and concise manner, capturing all essential points, \
key events and conclusions. Read the whole text before writing.
Start directly with the first sentence of the summary. Do not introduce it with phrases such as \
\"Here is a summary\".

Text:
---
{text}
---
Summary:";

const CONDENSE_TEMPLATE: &str = "\
The following are summaries of consecutive sections of one document. Merge them into a single \
coherent summary without repeating points.
Start directly with the first sentence of the summary.

Section summaries:
---
{text}
---
Summary:";

const TRANSLATE_TEMPLATE: &str = "\
You are an expert translator. Translate the text below from {source_language} into \
{target_language}.
Tokens of the form __PROTECTED_<number>__ are names. Copy them into the translation exactly as \
they appear and do not translate, reorder their characters or remove them.
Return only the translation, wrapped in <final_translation> tags.

<text_to_translate>
{text}
</text_to_translate>";

/// Prompt wording kept apart from any backend or model identifier.
#[derive(Debug, Clone)]
pub struct PromptTemplates {
    pub summarize: String,
    pub condense: String,
    pub translate: String,
}

impl PromptTemplates {
    pub fn summarize(&self, text: &str) -> String {
        self.summarize.replace("{text}", text)
    }

    pub fn condense(&self, chunk_summaries: &str) -> String {
        self.condense.replace("{text}", chunk_summaries)
    }

    pub fn translate(
        &self,
        text: &str,
        source_lang: LanguageCode,
        target_lang: LanguageCode,
    ) -> String {
        self.translate
            .replace("{source_language}", source_lang.display_name())
            .replace("{target_language}", target_lang.display_name())
            .replace("{text}", text)
    }
}

impl Default for PromptTemplates {
    fn default() -> Self {
        Self {
            summarize: SUMMARIZE_TEMPLATE.to_string(),
            condense: CONDENSE_TEMPLATE.to_string(),
            translate: TRANSLATE_TEMPLATE.to_string(),
        }
    }
}
