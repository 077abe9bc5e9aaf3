use std::fmt::Debug;

/// T values are primitive integers
pub trait PrimInt: ::num::PrimInt + Debug + Default {}
impl<T: ::num::PrimInt + Debug + Default> PrimInt for T {}

/// T values are signed primitive integers
pub trait PrimSigned: PrimInt + ::num::Signed {}

impl<T: PrimInt + ::num::Signed> PrimSigned for T {}
