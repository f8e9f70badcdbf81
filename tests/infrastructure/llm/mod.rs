mod client_factory_test;
mod llm_translation_client_test;
mod openai_client_test;
mod workers_ai_client_test;
