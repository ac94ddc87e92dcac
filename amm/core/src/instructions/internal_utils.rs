use crate::err::IxDataErr;

// Lets the ix data constructors stay `const`
/// caba = `const_assign_byte_array`
pub(crate) const fn caba<const A: usize, const START: usize, const LEN: usize>(
    mut arr: [u8; A],
    val: &[u8; LEN],
) -> [u8; A] {
    const {
        assert!(START + LEN <= A);
    }

    let mut i = 0;
    while i < LEN {
        arr[START + i] = val[i];
        i += 1;
    }
    arr
}

/// csba = `const_split_byte_array`
#[inline]
pub(crate) const fn csba<const M: usize, const N: usize, const X: usize>(
    data: &[u8; M],
) -> (&[u8; N], &[u8; X]) {
    const {
        assert!(N <= M);
        assert!(X == M - N)
    }

    // Safety: bounds checked above
    let (a, b) = unsafe { data.split_at_unchecked(N) };

    // SAFETY: data is guaranteed to be of length M
    // and we are splitting it into two slices of length N and X (i.e M-N)
    (unsafe { &*a.as_ptr().cast::<[u8; N]>() }, unsafe {
        &*b.as_ptr().cast::<[u8; X]>()
    })
}

/// Checks the leading discriminant byte and strips it
#[inline]
pub(crate) const fn strip_discm<const M: usize, const X: usize>(
    data: &[u8; M],
    discm: u8,
) -> Result<&[u8; X], IxDataErr> {
    let (d, rest) = csba::<M, 1, X>(data);
    if d[0] != discm {
        return Err(IxDataErr::WrongDiscm {
            expected: discm,
            actual: d[0],
        });
    }
    Ok(rest)
}

#[inline]
pub(crate) fn exact_len<const M: usize>(data: &[u8]) -> Result<&[u8; M], IxDataErr> {
    data.try_into().map_err(|_| IxDataErr::WrongLen {
        expected: M,
        actual: data.len(),
    })
}
