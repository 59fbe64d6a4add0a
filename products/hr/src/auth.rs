use entity::Principal;

use crate::store::HrStore;

impl HrStore {
    /// Map credentials to an identity by linear scan: HR accounts first,
    /// then employees. Plaintext, case-sensitive equality on both fields is
    /// a deliberate property of the prototype this models, not an oversight.
    pub fn authenticate(&self, email: &str, password: &str) -> Option<Principal> {
        if let Some(user) = self
            .hr_users
            .iter()
            .find(|user| user.email == email && user.password == password)
        {
            return Some(Principal::Hr(user.clone()));
        }
        self.employees
            .iter()
            .find(|emp| emp.email == email && emp.password == password)
            .map(|emp| Principal::Employee(emp.clone()))
    }
}
