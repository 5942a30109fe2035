/// Wizard steps, numbered 1 through 5
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Step {
    #[default]
    Location,
    BusinessDetails,
    Products,
    ContactInfo,
    CreateWebsite,
}

impl Step {
    pub const ALL: [Step; 5] = [
        Step::Location,
        Step::BusinessDetails,
        Step::Products,
        Step::ContactInfo,
        Step::CreateWebsite,
    ];

    pub fn number(&self) -> u8 {
        match self {
            Step::Location => 1,
            Step::BusinessDetails => 2,
            Step::Products => 3,
            Step::ContactInfo => 4,
            Step::CreateWebsite => 5,
        }
    }

    pub fn from_number(n: u8) -> Option<Step> {
        Self::ALL.iter().copied().find(|s| s.number() == n)
    }

    pub fn title(&self) -> &'static str {
        match self {
            Step::Location => "Set Location",
            Step::BusinessDetails => "Business Details",
            Step::Products => "Products/Services",
            Step::ContactInfo => "Contact Info",
            Step::CreateWebsite => "Create Website",
        }
    }

    pub fn next(&self) -> Option<Step> {
        Step::from_number(self.number() + 1)
    }

    pub fn prev(&self) -> Option<Step> {
        self.number().checked_sub(1).and_then(Step::from_number)
    }
}
