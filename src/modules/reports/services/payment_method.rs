/// Canonical payment-method label for anything outside the fixed table
pub const OTHER_LABEL: &str = "Outros";

/// Fixed normalization table: case-insensitive substring patterns mapped to
/// the canonical label shown on payment breakdowns. Source records carry
/// free text ("cartao_credito", "PIX ", "Dinheiro"), so matching is by
/// containment, not equality. Accented variants are listed alongside the
/// plain forms because upstream text is Portuguese.
const METHOD_TABLE: &[(&[&str], &str)] = &[
    (&["dinheiro"], "Dinheiro"),
    (&["pix"], "PIX"),
    (&["credito", "crédito"], "Cartão Crédito"),
    (&["debito", "débito"], "Cartão Débito"),
];

/// Normalizes a raw payment-method string; `None` and unmatched values both
/// map to [`OTHER_LABEL`].
pub fn normalize(raw: Option<&str>) -> &'static str {
    let Some(raw) = raw else {
        return OTHER_LABEL;
    };
    let lowered = raw.to_lowercase();

    for (patterns, label) in METHOD_TABLE {
        if patterns.iter().any(|p| lowered.contains(p)) {
            return label;
        }
    }

    OTHER_LABEL
}
