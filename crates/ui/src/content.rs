//! Static study material shown on the guide page.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TipIcon {
    Clock,
    Book,
    CheckSquare,
    HelpCircle,
}

impl TipIcon {
    #[must_use]
    pub fn glyph(self) -> &'static str {
        match self {
            TipIcon::Clock => "⏱",
            TipIcon::Book => "📖",
            TipIcon::CheckSquare => "☑",
            TipIcon::HelpCircle => "?",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TipGroup {
    pub title: &'static str,
    pub icon: TipIcon,
    pub tips: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Faq {
    pub question: &'static str,
    pub answer: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RelatedPassage {
    pub title: &'static str,
    pub summary: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RelatedBand {
    pub band: &'static str,
    pub level: &'static str,
    pub minutes: u32,
    pub passages: &'static [RelatedPassage],
}

pub const PREP_TIPS: &[TipGroup] = &[
    TipGroup {
        title: "Time Management",
        icon: TipIcon::Clock,
        tips: &[
            "Read the questions first to understand what to look for",
            "Skim the passage for main ideas",
            "Scan for specific details when answering questions",
            "Leave difficult questions for later",
            "Keep track of time for each section",
        ],
    },
    TipGroup {
        title: "Reading Strategies",
        icon: TipIcon::Book,
        tips: &[
            "Practice with various text types",
            "Learn to identify key words",
            "Understand paragraph structure",
            "Build vocabulary systematically",
            "Read academic articles regularly",
        ],
    },
    TipGroup {
        title: "Answer Techniques",
        icon: TipIcon::CheckSquare,
        tips: &[
            "Read instructions carefully",
            "Look for paraphrased information",
            "Check word limits for answers",
            "Use elimination for multiple choice",
            "Verify answers with passage",
        ],
    },
    TipGroup {
        title: "Common Pitfalls",
        icon: TipIcon::HelpCircle,
        tips: &[
            "Don't read the entire passage first",
            "Avoid assumptions not in text",
            "Don't spend too long on one question",
            "Check spelling and grammar",
            "Don't leave questions unanswered",
        ],
    },
];

pub const FAQS: &[Faq] = &[
    Faq {
        question: "How long is the IELTS Reading test?",
        answer: "The IELTS Reading test lasts for 60 minutes. You need to read three passages and answer 40 questions in total. Time management is crucial as you have approximately 1.5 minutes per question.",
    },
    Faq {
        question: "What types of questions are in the IELTS Reading test?",
        answer: "The test includes various question types such as multiple choice, true/false/not given, matching headings, sentence completion, and summary completion. Each type tests different reading skills and strategies.",
    },
    Faq {
        question: "How can I improve my reading speed?",
        answer: "Practice skimming and scanning techniques regularly. Read academic articles, newspapers, and journals to build your reading stamina. Focus on understanding main ideas and key details rather than reading every word.",
    },
    Faq {
        question: "Is it better to read the questions first or the passage?",
        answer: "It's generally recommended to skim the questions first to understand what information you need to look for. This helps you focus your reading and saves time by knowing what to pay attention to in the passage.",
    },
    Faq {
        question: "What should I do if I don't know the answer?",
        answer: "Don't leave any questions unanswered. Make an educated guess based on the context and your understanding of the passage. Remember, there's no penalty for wrong answers, so it's better to attempt every question.",
    },
];

pub const RELATED_PASSAGES: &[RelatedBand] = &[
    RelatedBand {
        band: "Band 6-7",
        level: "Foundation Level",
        minutes: 20,
        passages: &[
            RelatedPassage {
                title: "Stepwells Reading",
                summary: "Explore the ancient water architecture of India and its historical significance.",
            },
            RelatedPassage {
                title: "Coconut Palm",
                summary: "The versatile uses and cultural significance of coconut palms worldwide.",
            },
            RelatedPassage {
                title: "History of Glass",
                summary: "Evolution of glass-making from ancient times to modern applications.",
            },
        ],
    },
    RelatedBand {
        band: "Band 7-8",
        level: "Intermediate Level",
        minutes: 25,
        passages: &[
            RelatedPassage {
                title: "William Henry Perkin",
                summary: "The story of synthetic dye discovery and its impact on modern chemistry.",
            },
            RelatedPassage {
                title: "Intelligence Concept",
                summary: "Theories and debates surrounding human intelligence measurement.",
            },
            RelatedPassage {
                title: "Falkirk Wheel",
                summary: "Engineering marvel of the world's only rotating boat lift in Scotland.",
            },
        ],
    },
    RelatedBand {
        band: "Band 8-9",
        level: "Advanced Level",
        minutes: 30,
        passages: &[
            RelatedPassage {
                title: "Flying Tortoises",
                summary: "Conservation efforts to save the Galápagos tortoises through aerial transport.",
            },
            RelatedPassage {
                title: "White Horse",
                summary: "Ancient chalk figure carved into the English countryside and its mysteries.",
            },
        ],
    },
];
