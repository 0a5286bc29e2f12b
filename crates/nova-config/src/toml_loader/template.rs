//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> &'static str {
    r##"# Nova Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[assistant]
name = "Nova"
# creator = "the Nova team"
# creator_reply = "I was created by the Nova team, who built me to help you learn, create, and solve problems."
# literal_token = "url"
# literal_reply = "wss://voice.nova-assistant.dev/v1/connect"
# enhance_responses = true
# show_thinking = true

[gemini]
# model = "gemini-2.0-flash"
# image_model = "gemini-2.0-flash-exp-image-generation"
# vision_model = "gemini-1.5-flash"
# temperature = 0.7          # 0.0-2.0
# max_output_tokens = 2048   # 1-65536
# base_url = "https://generativelanguage.googleapis.com/v1beta"
# api_key_env = "GEMINI_API_KEY"

[speech]
# enabled = false
# lang = "en-US"
# continuous = true
# interim_results = true
# rate = 1.0                 # 0.1-10.0
# pitch = 1.0                # 0.0-2.0
# volume = 1.0               # 0.0-1.0
# chunk_limit = 4000         # 100-32000

[quiz]
# default_count = 5          # 1-50
# difficulty = "medium"      # easy, medium, hard

[logging]
# level = "INFO"             # DEBUG, INFO, WARNING, ERROR
"##
}
