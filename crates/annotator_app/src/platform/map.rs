//! Conversions between the core's domain types and the api crate's wire
//! types. The core stays serde-free; everything crossing the REST boundary
//! passes through here.

use std::collections::BTreeMap;

use annotator_api::{
    ApiEvent, WireArticleBundle, WireCodebook, WireCodedArticle, WireCoding, WireCodingValue,
    WireSavePayload,
};
use annotator_core::{
    ArticleBundle, ArticleSnapshot, ArticleStatus, Codebook, CodedArticleRow, CodingValue,
    FieldId, Msg, SavePayload, UnitCoding,
};

pub(crate) fn map_row(row: WireCodedArticle) -> CodedArticleRow {
    CodedArticleRow {
        id: row.id,
        article_id: row.article_id,
        title: row.title,
        medium: row.medium,
        date: row.date,
        pagenr: row.pagenr,
        length: row.length,
        status: row.status.map(ArticleStatus::from_id),
        comments: row.comments,
    }
}

fn map_coding(coding: WireCoding) -> UnitCoding {
    UnitCoding {
        sentence: coding.sentence,
        values: coding
            .values
            .into_iter()
            .map(|value| CodingValue {
                field: value.field,
                code: value.intval,
                text: value.strval,
            })
            .collect(),
    }
}

fn map_codebooks(codebooks: Vec<WireCodebook>) -> BTreeMap<FieldId, Codebook> {
    codebooks
        .into_iter()
        .map(|codebook| {
            (
                codebook.field,
                Codebook {
                    id: codebook.id,
                    codes: codebook.codes.into_iter().collect(),
                },
            )
        })
        .collect()
}

pub(crate) fn map_bundle(bundle: WireArticleBundle) -> ArticleBundle {
    ArticleBundle {
        id: bundle.detail.id,
        snapshot: ArticleSnapshot {
            status: bundle.detail.status.map(ArticleStatus::from_id),
            comment: bundle.detail.comments.unwrap_or_default(),
            codings: bundle
                .coding_set
                .codings
                .into_iter()
                .map(map_coding)
                .collect(),
        },
        codebooks: map_codebooks(bundle.coding_set.codebooks),
    }
}

pub(crate) fn map_payload(payload: &SavePayload) -> (u64, WireSavePayload) {
    let codings = payload
        .codings
        .iter()
        .map(|coding| WireCoding {
            sentence: coding.sentence,
            values: coding
                .values
                .iter()
                .map(|value| WireCodingValue {
                    field: value.field,
                    intval: value.code,
                    strval: value.text.clone(),
                })
                .collect(),
        })
        .collect();
    (
        payload.id,
        WireSavePayload {
            status: payload.status.id(),
            comments: payload.comment.clone(),
            codings,
        },
    )
}

pub(crate) fn map_event(event: ApiEvent) -> Msg {
    match event {
        ApiEvent::ListFetched { seq, result } => Msg::ArticleListLoaded {
            seq,
            result: result
                .map(|rows| rows.into_iter().map(map_row).collect())
                .map_err(|err| err.to_string()),
        },
        ApiEvent::ArticleLoaded { seq, result } => Msg::ArticleLoaded {
            seq,
            result: result.map(map_bundle).map_err(|err| err.to_string()),
        },
        ApiEvent::SaveFinished { result, .. } => Msg::SaveCompleted {
            result: result.map_err(|err| err.to_string()),
        },
    }
}
