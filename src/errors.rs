// Validation
pub const ERR_INVALID_AMOUNT: &str = "InvalidAmount";
pub const ERR_WRONG_TOKEN: &str = "Wrong payment token";
pub const ERR_EXPIRY_OUT_OF_RANGE: &str = "ExpiryOutOfRange";
pub const ERR_INVALID_BPS: &str = "Invalid bps: must be between 1 and 10000";
pub const ERR_INVALID_CAP: &str = "Invalid cap: must be at most 10000";
pub const ERR_ZERO_ADDRESS: &str = "Zero address";
pub const ERR_ZERO_FUNDING: &str = "ZeroFunding";
pub const ERR_INVALID_CONFIG: &str = "Invalid configuration";

// State preconditions
pub const ERR_LOCK_ALREADY_EXISTS: &str = "LockAlreadyExists";
pub const ERR_NO_ACTIVE_LOCK: &str = "NoActiveLock";
pub const ERR_LOCK_EXPIRED: &str = "LockExpired";
pub const ERR_NOT_AN_EXTENSION: &str = "NotAnExtension";
pub const ERR_LOCK_NOT_EXPIRED: &str = "LockNotExpired";
pub const ERR_NOTHING_TO_WITHDRAW: &str = "NothingToWithdraw";
pub const ERR_DESTINATION_NOT_REGISTERED: &str = "DestinationNotRegistered";
pub const ERR_DESTINATION_ALREADY_REGISTERED: &str = "Destination already registered";
pub const ERR_TOO_MANY_DESTINATIONS: &str = "Too many destinations";
pub const ERR_ZERO_VOTING_POWER: &str = "ZeroVotingPower";
pub const ERR_COOLDOWN_ACTIVE: &str = "CooldownActive";
pub const ERR_NO_VOTE: &str = "No vote on this destination";
pub const ERR_EPOCH_NOT_READY: &str = "EpochNotReady";
pub const ERR_NO_DESTINATIONS: &str = "NoDestinations";

// Invariant guards
pub const ERR_ALLOCATION_EXCEEDS_100_PERCENT: &str = "AllocationExceeds100Percent";
pub const ERR_SHARES_EXCEED_100_PERCENT: &str = "Destination shares exceed 100%";
