use super::types::{CalcError, EmiBreakdown, SipOutcome};

fn monthly_rate(annual_rate_percent: f64) -> f64 {
    annual_rate_percent / 12.0 / 100.0
}

/// Equated monthly installment for an amortized loan.
///
/// A non-positive rate falls back to a straight division of the principal,
/// which keeps the amortization formula away from its zero denominator.
pub fn calculate_emi(
    principal: f64,
    annual_rate_percent: f64,
    tenure_months: u32,
) -> Result<EmiBreakdown, CalcError> {
    if tenure_months == 0 {
        return Err(CalcError::InvalidTenure);
    }

    let months = tenure_months as f64;
    let rate = monthly_rate(annual_rate_percent);

    let emi = if rate > 0.0 {
        principal * rate * (1.0 + rate).powf(months) / ((1.0 + rate).powf(months) - 1.0)
    } else {
        principal / months
    };

    let total_payment = emi * months;
    Ok(EmiBreakdown {
        emi,
        total_payment,
        total_interest: total_payment - principal,
        principal,
    })
}

/// Future value of a fixed monthly investment, treated as an annuity due.
pub fn calculate_sip(monthly_investment: f64, annual_return_percent: f64, years: f64) -> SipOutcome {
    let rate = monthly_rate(annual_return_percent);
    let months = years * 12.0;

    let future_value = if rate > 0.0 {
        monthly_investment * (((1.0 + rate).powf(months) - 1.0) / rate) * (1.0 + rate)
    } else {
        monthly_investment * months
    };

    let invested_amount = monthly_investment * months;
    SipOutcome {
        invested_amount,
        returns: future_value - invested_amount,
        future_value,
    }
}

/// SIP whose monthly contribution steps up by a fixed percentage each year.
///
/// The contribution changes every year, so there is no closed-form annuity:
/// each month's contribution is compounded forward by its exact number of
/// remaining months. At a zero rate every contribution compounds to itself.
pub fn calculate_step_up_sip(
    initial_monthly: f64,
    annual_return_percent: f64,
    years: u32,
    step_up_percent_per_year: f64,
) -> SipOutcome {
    let rate = monthly_rate(annual_return_percent);
    let mut invested = 0.0;
    let mut future_value = 0.0;
    let mut current_monthly = initial_monthly;

    for year in 0..years {
        for month in 0..12u32 {
            let remaining_months = ((years - year) * 12 - month) as f64;
            invested += current_monthly;
            future_value += if rate > 0.0 {
                current_monthly * (1.0 + rate).powf(remaining_months)
            } else {
                current_monthly
            };
        }
        current_monthly *= 1.0 + step_up_percent_per_year / 100.0;
    }

    SipOutcome {
        invested_amount: invested,
        returns: future_value - invested,
        future_value,
    }
}

/// Compound annual growth rate, as a percentage.
///
/// Returns 0.0 for a non-positive beginning value or time span; a brand-new
/// holding has no annualized growth yet, so this is a sentinel rather than an
/// error.
pub fn calculate_cagr(beginning_value: f64, ending_value: f64, years: f64) -> f64 {
    if beginning_value <= 0.0 || years <= 0.0 {
        return 0.0;
    }
    ((ending_value / beginning_value).powf(1.0 / years) - 1.0) * 100.0
}
