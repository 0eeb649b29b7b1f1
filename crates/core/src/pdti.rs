//! Lifecycle rules for PDTI (IT-plan) actions.
//!
//! `data_conclusao` is derived from `situacao`: it is stamped with the
//! current date when an action becomes "Concluída" and cleared whenever the
//! action leaves that state.

use chrono::NaiveDate;

/// The only `situacao` that carries a completion date. Compared byte-exact.
pub const SITUACAO_CONCLUIDA: &str = "Concluída";

/// Applied when a new action arrives without a `situacao`.
pub const SITUACAO_NAO_INICIADA: &str = "Não iniciada";

/// Today's date in the server's local calendar.
pub fn hoje() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Resolve the `situacao` of a new action.
pub fn situacao_inicial(situacao: Option<&str>) -> &str {
    situacao.unwrap_or(SITUACAO_NAO_INICIADA)
}

/// Completion date for a freshly created action.
pub fn data_conclusao_inicial(situacao: &str, hoje: NaiveDate) -> Option<NaiveDate> {
    (situacao == SITUACAO_CONCLUIDA).then_some(hoje)
}

/// Completion date after `situacao` has been rewritten.
///
/// Re-sending "Concluída" keeps an already recorded date.
pub fn data_conclusao_atualizada(
    situacao: &str,
    atual: Option<NaiveDate>,
    hoje: NaiveDate,
) -> Option<NaiveDate> {
    if situacao == SITUACAO_CONCLUIDA {
        atual.or(Some(hoje))
    } else {
        None
    }
}
