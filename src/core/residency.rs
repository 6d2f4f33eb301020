use serde::Serialize;

/// Tax-residency status under Section 6 of the Income Tax Act, 1961.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ResidencyStatus {
    Nri,
    Rnor,
    Ror,
}

/// Answers to the residency questionnaire for one financial year.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResidencyAnswers {
    /// Stayed in India for 182 days or more this financial year.
    pub stayed_182_days: bool,
    /// Indian citizen or person of Indian origin living abroad.
    pub citizen_or_pio_abroad: bool,
    /// Indian-sourced income above Rs 15 lakh this year.
    pub income_above_15_lakh: bool,
    /// 120 days this year and 365 days across the preceding four years.
    pub meets_120_day_rule: bool,
    /// 60 days this year and 365 days across the preceding four years.
    pub meets_60_day_rule: bool,
    /// Non-resident in at least 9 of the 10 preceding years.
    pub nri_in_9_of_10_years: bool,
    /// At most 729 days in India across the 7 preceding years.
    pub under_730_days_in_7_years: bool,
}

/// Classifies a person as NRI, RNOR, or ROR.
///
/// Citizens or PIOs living abroad are only caught by the 120-day rule when
/// their Indian income exceeds Rs 15 lakh; below that threshold the 182-day
/// test alone applies to them. Everyone else falls under the 60-day rule.
pub fn determine_residency(answers: ResidencyAnswers) -> ResidencyStatus {
    let resident = answers.stayed_182_days
        || if answers.citizen_or_pio_abroad {
            answers.income_above_15_lakh && answers.meets_120_day_rule
        } else {
            answers.meets_60_day_rule
        };

    if !resident {
        return ResidencyStatus::Nri;
    }

    if answers.nri_in_9_of_10_years || answers.under_730_days_in_7_years {
        ResidencyStatus::Rnor
    } else {
        ResidencyStatus::Ror
    }
}
