//! Code tables from the Nursys API appendix.

/// A.2 License types.
pub mod license_type {
    /// Registered Nurse
    pub const RN: &str = "RN";
    /// Practical Nurse (Vocational Nurse)
    pub const PN: &str = "PN";
    /// Certified Nurse Midwife
    pub const CNM: &str = "CNM";
    /// Certified Registered Nurse Anesthetist
    pub const CRNA: &str = "CRNA";
    /// Clinical Nurse Specialist
    pub const CNS: &str = "CNS";
    /// Certified Nurse Practitioner
    pub const CNP: &str = "CNP";

    pub const ALL: [&str; 6] = [RN, PN, CNM, CRNA, CNS, CNP];
}

/// A.7 Submission action codes.
pub mod action_code {
    /// Add a new nurse to the nurse list, or update an existing one.
    pub const ADD: &str = "A";
    /// Remove this nurse.
    pub const REMOVE: &str = "R";
}
