//! OpenAPI Documentation
//!
//! Centralized API documentation using utoipa.

use utoipa::OpenApi;

use crate::models::{
    CreateVocabRequest, DefinitionResponse, LookupResponse, SelectSubjectMessage,
    SourceAttemptResponse, VocabEntryResponse, VocabListResponse,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Vocab endpoints
        super::vocab::list_vocab,
        super::vocab::create_vocab,
        super::live::live_vocab,
        // Lookup endpoints
        super::lookup::lookup_definitions,
    ),
    components(schemas(
        CreateVocabRequest,
        VocabEntryResponse,
        VocabListResponse,
        SelectSubjectMessage,
        DefinitionResponse,
        SourceAttemptResponse,
        LookupResponse,
    )),
    tags(
        (name = "Vocab", description = "Flashcard entries grouped by subject"),
        (name = "Lookup", description = "Definition suggestions from public dictionaries")
    ),
    info(
        title = "Lexicard API",
        version = "0.1.0",
        description = "Vocabulary flashcards with multi-dictionary definition lookup"
    )
)]
pub struct ApiDoc;
