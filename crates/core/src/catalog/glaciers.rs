//! Bundled content: the glacier passage and its sixteen practice questions.

use crate::model::{
    CategoryIcon, MatchItem, MatchSet, Paragraph, Passage, Question, QuestionCategory,
    QuestionKind, Reference, Segment,
};

const PARA_A_1: &str = "Glaciers are massive ice formations that develop over hundreds or thousands of years when fallen snow compresses into thick ice masses.";
const PARA_B_1: &str = "This process can take several decades to centuries.";
const PARA_C_1: &str =
    "Under the influence of gravity and their own weight, glaciers flow like very slow rivers.";
const PARA_C_3: &str = "This glacial movement can be as slow as a few meters per year.";
const PARA_D_2: &str = "Scientists study glaciers to understand past climate conditions and predict future environmental changes.";
const PARA_D_3: &str =
    "Their sensitivity to temperature fluctuations makes them natural barometers of global warming.";
const PARA_E_1: &str = "Over long periods, glacial movement dramatically transforms the terrain, creating distinctive U-shaped valleys.";

pub(super) fn passage() -> Passage {
    Passage::new(
        "Glaciers Reading Passage",
        "para-all",
        vec![
            Paragraph::new(
                "A",
                vec![
                    Segment::anchored(
                        "para-a-1",
                        "Glaciers are massive ice formations that develop over hundreds or thousands of years when fallen snow compresses into thick ice masses.",
                    ),
                    Segment::plain(
                        " These remarkable natural phenomena play a crucial role in Earth's climate system and water cycle. ",
                    ),
                    Segment::anchored(
                        "para-a-3",
                        "As snow accumulates over time, the weight of the upper layers compresses the snow beneath",
                    ),
                    Segment::plain(", transforming it into dense glacier ice."),
                ],
            ),
            Paragraph::new(
                "B",
                vec![
                    Segment::anchored("para-b-1", "This process can take several decades to centuries, "),
                    Segment::anchored(
                        "para-b-2",
                        "resulting in ice formations that can be hundreds or even thousands of meters thick.",
                    ),
                    Segment::plain(
                        " The continuous accumulation of snow and its gradual transformation into ice creates these massive structures that have shaped our planet's surface.",
                    ),
                ],
            ),
            Paragraph::new(
                "C",
                vec![
                    Segment::plain(
                        "The movement of glaciers is a fascinating process that shapes our landscape. ",
                    ),
                    Segment::anchored(
                        "para-c-1",
                        "Under the influence of gravity and their own weight, glaciers flow like very slow rivers, carving valleys and transporting vast amounts of rock and sediment.",
                    ),
                    Segment::plain(" "),
                    Segment::anchored(
                        "para-c-3",
                        "This glacial movement can be as slow as a few meters per year.",
                    ),
                ],
            ),
            Paragraph::new(
                "D",
                vec![
                    Segment::anchored(
                        "para-d-1",
                        "Today, glaciers serve as crucial indicators of climate change.",
                    ),
                    Segment::plain(" "),
                    Segment::anchored(
                        "para-d-3",
                        "Their sensitivity to temperature fluctuations makes them natural barometers of global warming.",
                    ),
                    Segment::plain(" "),
                    Segment::anchored(
                        "para-d-2",
                        "Scientists study glaciers to understand past climate conditions and predict future environmental changes.",
                    ),
                ],
            ),
            Paragraph::new(
                "E",
                vec![
                    Segment::anchored(
                        "para-e-1",
                        "Over long periods, glacial movement dramatically transforms the terrain, creating distinctive U-shaped valleys, cirques, and other glacial landforms.",
                    ),
                    Segment::plain(
                        " The retreat of glaciers worldwide has become one of the most visible signs of global climate change, ",
                    ),
                    Segment::anchored(
                        "para-e-3",
                        "with significant implications for water resources, sea level rise, and local ecosystems.",
                    ),
                ],
            ),
        ],
    )
}

fn options(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| (*item).to_string()).collect()
}

#[allow(clippy::too_many_lines)]
pub(super) fn questions() -> Vec<Question> {
    vec![
        // True/False (1-5)
        Question::true_false(
            1,
            "According to paragraph A, glaciers develop when snow compresses into ice over time.",
            "True",
            Reference::new("A", PARA_A_1, "para-a-1"),
            "The passage explicitly states that glaciers form through the compression of snow over extended periods.",
        ),
        Question::true_false(
            2,
            "Based on paragraph B, glacier formation takes only a few years to complete.",
            "False",
            Reference::new("B", PARA_B_1, "para-b-1"),
            "The passage states that the process takes much longer than a few years.",
        ),
        Question::true_false(
            3,
            "As mentioned in paragraph C, glaciers remain stationary and do not move.",
            "False",
            Reference::new("C", PARA_C_1, "para-c-1"),
            "The passage clearly describes glaciers as moving entities.",
        ),
        Question::true_false(
            4,
            "According to paragraph D, glaciers can be used to study past climate conditions.",
            "True",
            Reference::new("D", PARA_D_2, "para-d-2"),
            "The passage explicitly mentions that scientists use glaciers to understand past climate conditions.",
        ),
        Question::true_false(
            5,
            "As stated in paragraph E, glacial movement creates U-shaped valleys.",
            "True",
            Reference::new("E", PARA_E_1, "para-e-1"),
            "The passage directly states that glacial movement creates U-shaped valleys.",
        ),
        // Multiple choice (6-10)
        Question::multiple_choice(
            6,
            "What is the primary factor in glacier formation according to paragraph A?",
            "Compression of snow over time",
            options(&[
                "Compression of snow over time",
                "Rapid freezing of water",
                "Accumulation of ice crystals",
                "Melting and refreezing of ice",
            ]),
            Reference::new("A", PARA_A_1, "para-a-1"),
            "The passage states that glaciers form when fallen snow compresses into thick ice masses.",
        ),
        Question::multiple_choice(
            7,
            "How long can the glacier formation process take according to paragraph B?",
            "Several decades to centuries",
            options(&[
                "Several days to weeks",
                "Several months to years",
                "Several decades to centuries",
                "Several minutes to hours",
            ]),
            Reference::new("B", PARA_B_1, "para-b-1"),
            "The passage explicitly states that the process takes several decades to centuries.",
        ),
        Question::multiple_choice(
            8,
            "What is the rate of glacial movement mentioned in paragraph C?",
            "A few meters per year",
            options(&[
                "A few centimeters per day",
                "A few meters per year",
                "A few kilometers per month",
                "A few miles per week",
            ]),
            Reference::new("C", PARA_C_3, "para-c-3"),
            "The passage specifies that glacial movement can be as slow as a few meters per year.",
        ),
        Question::multiple_choice(
            9,
            "According to paragraph D, what do scientists use glaciers for?",
            "Understanding past climate conditions",
            options(&[
                "Understanding past climate conditions",
                "Predicting earthquakes",
                "Studying ocean currents",
                "Measuring atmospheric pressure",
            ]),
            Reference::new("D", PARA_D_2, "para-d-2"),
            "The passage states that scientists study glaciers to understand past climate conditions.",
        ),
        Question::multiple_choice(
            10,
            "What type of valleys are created by glacial movement according to paragraph E?",
            "U-shaped valleys",
            options(&[
                "V-shaped valleys",
                "U-shaped valleys",
                "W-shaped valleys",
                "O-shaped valleys",
            ]),
            Reference::new("E", PARA_E_1, "para-e-1"),
            "The passage specifically mentions that glacial movement creates U-shaped valleys.",
        ),
        // Matching (11)
        Question::matching(
            11,
            "Match the following descriptions with their corresponding paragraphs:",
            "A",
            MatchSet {
                items: vec![
                    MatchItem::new("A", "Formation Process"),
                    MatchItem::new("B", "Time Scale"),
                    MatchItem::new("C", "Movement Pattern"),
                    MatchItem::new("D", "Scientific Value"),
                    MatchItem::new("E", "Environmental Impact"),
                ],
                descriptions: options(&[
                    "Describes how glaciers are created from snow compression",
                    "Explains the duration required for glacier development",
                    "Details how glaciers move and shape the landscape",
                    "Discusses the role of glaciers in climate research",
                    "Outlines the effects of glacial movement on terrain",
                ]),
            },
            Reference::new("All", "Multiple paragraphs", "para-all"),
            "Each description matches with the main topic discussed in the corresponding paragraph.",
        ),
        // Fill in the blanks (12-16)
        Question::fill_blank(
            12,
            "According to paragraph A, glaciers develop when ________ compresses into ice over time.",
            "snow",
            Reference::new("A", PARA_A_1, "para-a-1"),
            "The passage states that glaciers form when fallen snow compresses into thick ice masses.",
        ),
        Question::fill_blank(
            13,
            "The process of glacier formation can take several ________ to centuries.",
            "decades",
            Reference::new("B", PARA_B_1, "para-b-1"),
            "The passage mentions that the process takes several decades to centuries.",
        ),
        Question::fill_blank(
            14,
            "Glaciers flow like very slow ________ under the influence of gravity.",
            "rivers",
            Reference::new("C", PARA_C_1, "para-c-1"),
            "The passage compares glacial movement to very slow rivers.",
        ),
        Question::fill_blank(
            15,
            "According to paragraph D, glaciers serve as natural ________ of global warming.",
            "barometers",
            Reference::new("D", PARA_D_3, "para-d-3"),
            "The passage uses this specific term to describe glaciers' role in indicating global warming.",
        ),
        Question::fill_blank(
            16,
            "Glacial movement creates distinctive ________-shaped valleys.",
            "U",
            Reference::new("E", PARA_E_1, "para-e-1"),
            "The passage specifically mentions U-shaped valleys as a result of glacial movement.",
        ),
    ]
}

pub(super) fn categories() -> Vec<QuestionCategory> {
    vec![
        QuestionCategory::new(
            QuestionKind::TrueFalse,
            "True/False Questions",
            "Read each statement carefully and determine if it is True or False based on the information provided in the passage.",
            &[
                "Read the statement carefully and compare it with the passage",
                "Look for qualifying words like \"always\", \"never\", \"all\"",
                "Don't rely on prior knowledge - focus on the passage",
                "Pay attention to negative statements",
            ],
            CategoryIcon::CheckSquare,
        ),
        QuestionCategory::new(
            QuestionKind::MultipleChoice,
            "Multiple Choice Questions",
            "Choose the best answer from the given options based on the information in the passage.",
            &[
                "Read all options carefully before selecting",
                "Eliminate obviously incorrect answers",
                "Look for evidence in the passage to support your choice",
                "Be careful of distractors that seem partially correct",
            ],
            CategoryIcon::ListChecks,
        ),
        QuestionCategory::new(
            QuestionKind::Matching,
            "Matching Questions",
            "Match the given terms or phrases with their correct descriptions from the passage.",
            &[
                "Scan the passage for key terms and phrases",
                "Eliminate options as you go",
                "Look for synonyms and paraphrasing",
                "Check your answers by reading the context",
            ],
            CategoryIcon::ListChecks,
        ),
        QuestionCategory::new(
            QuestionKind::FillBlank,
            "Fill in the Blanks",
            "Complete each sentence by filling in the blank with the appropriate word from the passage.",
            &[
                "Read the sentence before and after the blank",
                "Check word limits if specified",
                "Ensure grammatical consistency",
                "Pay attention to singular/plural forms",
            ],
            CategoryIcon::Type,
        ),
    ]
}
