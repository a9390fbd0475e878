use shared::constants::{MAX_DONEES_PER_DONATION, MAX_PERCENTAGE, MIN_PERCENTAGE, PERCENT_TOTAL};
use shared::errors::Error;
use shared::interfaces::RegistryClient;
use shared::is_zero_address;
use shared::types::DoneeSplit;
use soroban_sdk::{Env, Vec};

/// Validate a donation split request.
///
/// Every entry is checked in order (address, percentage, trust) before the
/// percentages are totalled, so the first malformed entry decides the error.
pub fn validate_splits(
    env: &Env,
    registry: &RegistryClient,
    splits: &Vec<DoneeSplit>,
) -> Result<(), Error> {
    if splits.is_empty() {
        return Err(Error::NoDonees);
    }
    if splits.len() > MAX_DONEES_PER_DONATION {
        return Err(Error::InvInput);
    }

    let mut total: u32 = 0;
    for split in splits.iter() {
        if is_zero_address(env, &split.donee) {
            return Err(Error::ZeroAddr);
        }
        if split.percentage < MIN_PERCENTAGE || split.percentage > MAX_PERCENTAGE {
            return Err(Error::InvPct);
        }
        if !registry.is_donee_enabled(&split.donee) {
            return Err(Error::Untrusted);
        }
        total += split.percentage;
    }

    if total != PERCENT_TOTAL {
        return Err(Error::InvTotalPct);
    }

    Ok(())
}
