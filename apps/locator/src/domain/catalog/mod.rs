pub mod districts;
pub mod local_override;

pub use districts::{canonical_state, districts_for, is_union_territory, states};
pub use local_override::{
    LOCAL_OVERRIDE_STATE, is_local_override_state, local_candidates, local_district_for_pincode,
};
