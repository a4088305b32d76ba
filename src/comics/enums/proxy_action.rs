#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProxyAction {
    IsContentInappropriate,
    TranslateToEnglish,
    GenerateStory,
    GeneratePanelBreakdown,
    GenerateComicPage,
}

impl ProxyAction {
    pub fn value(&self) -> &'static str {
        match *self {
            Self::IsContentInappropriate => "isContentInappropriate",
            Self::TranslateToEnglish => "translateToEnglish",
            Self::GenerateStory => "generateStory",
            Self::GeneratePanelBreakdown => "generatePanelBreakdown",
            Self::GenerateComicPage => "generateComicPage",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        match value {
            "isContentInappropriate" => Some(Self::IsContentInappropriate),
            "translateToEnglish" => Some(Self::TranslateToEnglish),
            "generateStory" => Some(Self::GenerateStory),
            "generatePanelBreakdown" => Some(Self::GeneratePanelBreakdown),
            "generateComicPage" => Some(Self::GenerateComicPage),
            _ => None,
        }
    }
}
