use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    NotInit = 1,
    AlreadyInit = 2,
    Unauthorized = 3,
    InvInput = 4,
    Overflow = 5,

    // Donee registry errors
    DoneeExists = 10,
    DoneeNF = 11,
    ZeroAddr = 12,
    InvName = 13,

    // Investment pool errors
    InvSymbol = 20,
    ZeroAmount = 21,
    InsufFunds = 22,
    InsufInterest = 23,
    DupSymbol = 24,

    // Donation errors
    NoDonees = 30,
    InvPct = 31,
    InvTotalPct = 32,
    Untrusted = 33,
    NoInterests = 34,
    PoolExists = 35,
    PoolNF = 36,

    // Yield market errors
    InsufCTokens = 40,
    InsufReserves = 41,
    InvRate = 42,
}

impl Error {
    /// Human-readable abort reason, stable across releases.
    pub fn reason(&self) -> &'static str {
        match self {
            Error::NotInit => "Contract not initialized",
            Error::AlreadyInit => "Contract already initialized",
            Error::Unauthorized => "Caller is not authorized",
            Error::InvInput => "Invalid input",
            Error::Overflow => "Arithmetic overflow",
            Error::DoneeExists => "Donee already exists",
            Error::DoneeNF => "Donee does not exist",
            Error::ZeroAddr => "Address cannot be 0",
            Error::InvName => "Name must be between 1-32 bytes",
            Error::InvSymbol => "Invalid token symbol",
            Error::ZeroAmount => "Amount must be greater than 0",
            Error::InsufFunds => "Insufficient balance",
            Error::InsufInterest => "Insufficient generated interests",
            Error::DupSymbol => "Duplicated token symbol",
            Error::NoDonees => "There must be at least one donee",
            Error::InvPct => "Percentage must be between 1-100",
            Error::InvTotalPct => "Total percentage must be 100",
            Error::Untrusted => "Only trusted donees are valid",
            Error::NoInterests => "No generated interests",
            Error::PoolExists => "Investment pool already opened",
            Error::PoolNF => "Investment pool not found",
            Error::InsufCTokens => "Insufficient cToken balance",
            Error::InsufReserves => "Insufficient market cash",
            Error::InvRate => "Invalid supply rate",
        }
    }
}
