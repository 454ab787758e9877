/// Query pair that opens the media processor on a specific tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessorSelection {
    category: &'static str,
    function: &'static str,
}

impl ProcessorSelection {
    /// Audio extraction lives under the video category in the unified processor.
    pub const AUDIO_EXTRACT: Self = Self {
        category: "video",
        function: "audio-extract",
    };

    pub fn category(&self) -> &'static str {
        self.category
    }

    pub fn function(&self) -> &'static str {
        self.function
    }

    pub fn to_query(&self) -> String {
        format!("category={}&function={}", self.category, self.function)
    }
}
