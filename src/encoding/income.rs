/// Named income bands used in both profile and entity text.
///
/// Upper bounds are inclusive, so a profile earning exactly an offer's ceiling and the
/// offer itself fall in the same band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum IncomeBracket {
    EconomicallyWeaker,
    Lower,
    LowerMiddle,
    Middle,
    Upper,
}

impl IncomeBracket {
    pub const ECONOMICALLY_WEAKER_MAX: u64 = 100_000;
    pub const LOWER_MAX: u64 = 250_000;
    pub const LOWER_MIDDLE_MAX: u64 = 500_000;
    pub const MIDDLE_MAX: u64 = 800_000;

    pub fn for_income(income: u64) -> Self {
        match income {
            i if i <= Self::ECONOMICALLY_WEAKER_MAX => Self::EconomicallyWeaker,
            i if i <= Self::LOWER_MAX => Self::Lower,
            i if i <= Self::LOWER_MIDDLE_MAX => Self::LowerMiddle,
            i if i <= Self::MIDDLE_MAX => Self::Middle,
            _ => Self::Upper,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::EconomicallyWeaker => {
                "economically weaker section (EWS), below poverty line, very low income family"
            }
            Self::Lower => "lower income family, low income group",
            Self::LowerMiddle => "lower middle income family",
            Self::Middle => "middle income family",
            Self::Upper => "upper middle income family",
        }
    }
}
