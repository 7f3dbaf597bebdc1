mod practice_vm;
mod timer_vm;

pub use practice_vm::{
    AnswerInputVm, CategoryTabVm, ChoiceVm, DetailCategoryVm, DetailItemVm, FeedbackVm,
    KindScoreVm, MatchingStepVm, ParagraphVm, PassageVm, PracticeIntent, QuestionVm, SegmentVm,
    category_glyph, map_active_questions, map_category_tabs, map_detail_categories, map_passage,
    map_question, map_score_breakdown, score_label,
};
pub use timer_vm::{TimerVm, map_timer};
