use crate::domain::models::{Question, QuestionType};
use std::fmt;
use thiserror::Error;

fn is_present(value: Option<&str>) -> bool {
    value.map(|v| !v.trim().is_empty()).unwrap_or(false)
}

/// Infers how a question should be presented from which media files it carries.
/// Text content does not take part in the decision.
pub fn classify(voice_file: Option<&str>, picture_file: Option<&str>) -> QuestionType {
    match (is_present(voice_file), is_present(picture_file)) {
        (true, true) => QuestionType::Combined,
        (true, false) => QuestionType::Voice,
        (false, true) => QuestionType::Picture,
        (false, false) => QuestionType::Text,
    }
}

/// Uses the backend's explicit type when it names a known variant, the classifier otherwise.
pub fn resolve(
    explicit: Option<&str>,
    voice_file: Option<&str>,
    picture_file: Option<&str>,
) -> QuestionType {
    explicit
        .and_then(|raw| QuestionType::try_from(raw).ok())
        .unwrap_or_else(|| classify(voice_file, picture_file))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuestionField {
    QuestionText,
    VoiceFile,
    PictureFile,
    AnswerOptions,
}

impl QuestionField {
    /// Wire name of the field.
    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionField::QuestionText => "questionText",
            QuestionField::VoiceFile => "voiceFile",
            QuestionField::PictureFile => "pictureFile",
            QuestionField::AnswerOptions => "answerOptions",
        }
    }

    pub fn is_populated(&self, question: &Question) -> bool {
        match self {
            QuestionField::QuestionText => is_present(question.text.as_deref()),
            QuestionField::VoiceFile => is_present(question.voice_file.as_deref()),
            QuestionField::PictureFile => is_present(question.picture_file.as_deref()),
            QuestionField::AnswerOptions => question
                .answer_options
                .as_ref()
                .map(|o| !o.is_empty())
                .unwrap_or(false),
        }
    }
}

impl fmt::Display for QuestionField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuestionTypeSpec {
    pub question_type: QuestionType,
    pub required: &'static [QuestionField],
    pub optional: &'static [QuestionField],
    /// Media fields that would make the classifier pick a different type.
    pub forbidden: &'static [QuestionField],
    pub description: &'static str,
}

static SPECS: [QuestionTypeSpec; 4] = [
    QuestionTypeSpec {
        question_type: QuestionType::Text,
        required: &[QuestionField::QuestionText],
        optional: &[QuestionField::AnswerOptions],
        forbidden: &[QuestionField::VoiceFile, QuestionField::PictureFile],
        description: "Text question: needs non-empty question text, no media files",
    },
    QuestionTypeSpec {
        question_type: QuestionType::Voice,
        required: &[QuestionField::VoiceFile],
        optional: &[QuestionField::QuestionText, QuestionField::AnswerOptions],
        forbidden: &[QuestionField::PictureFile],
        description: "Voice question: needs a voice file and no picture, text is optional",
    },
    QuestionTypeSpec {
        question_type: QuestionType::Picture,
        required: &[QuestionField::PictureFile],
        optional: &[QuestionField::QuestionText, QuestionField::AnswerOptions],
        forbidden: &[QuestionField::VoiceFile],
        description: "Picture question: needs a picture file and no voice, text is optional",
    },
    QuestionTypeSpec {
        question_type: QuestionType::Combined,
        required: &[QuestionField::VoiceFile, QuestionField::PictureFile],
        optional: &[QuestionField::QuestionText, QuestionField::AnswerOptions],
        forbidden: &[],
        description: "Combined question: needs both a voice file and a picture file",
    },
];

#[derive(Error, Debug, PartialEq, Eq)]
pub enum QuestionValidationError {
    #[error("{question_type} question {question_id} is missing required field {field}")]
    MissingField {
        question_id: i64,
        question_type: QuestionType,
        field: QuestionField,
    },
    #[error("{question_type} question {question_id} must not carry {field}")]
    UnexpectedField {
        question_id: i64,
        question_type: QuestionType,
        field: QuestionField,
    },
}

pub struct QuestionTypeRegistry;

impl QuestionTypeRegistry {
    pub fn spec(question_type: QuestionType) -> &'static QuestionTypeSpec {
        match question_type {
            QuestionType::Text => &SPECS[0],
            QuestionType::Voice => &SPECS[1],
            QuestionType::Picture => &SPECS[2],
            QuestionType::Combined => &SPECS[3],
        }
    }

    pub fn specs() -> &'static [QuestionTypeSpec] {
        &SPECS
    }

    /// Checks required fields are populated and no conflicting media is attached.
    pub fn validate(question: &Question) -> Result<(), QuestionValidationError> {
        let spec = Self::spec(question.question_type);
        if let Some(&field) = spec.required.iter().find(|f| !f.is_populated(question)) {
            return Err(QuestionValidationError::MissingField {
                question_id: question.id,
                question_type: question.question_type,
                field,
            });
        }
        if let Some(&field) = spec.forbidden.iter().find(|f| f.is_populated(question)) {
            return Err(QuestionValidationError::UnexpectedField {
                question_id: question.id,
                question_type: question.question_type,
                field,
            });
        }
        Ok(())
    }
}
