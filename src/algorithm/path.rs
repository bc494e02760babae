use num_traits::{Float, Zero};
use std::fmt::Debug;

use crate::algorithm::AllPairsResult;
use crate::{Error, Result};

/// Reconstructs the shortest path from `source` to `target` as a sequence
/// of node indices, endpoints included.
///
/// Returns an empty sequence when `target` is unreachable from `source`.
/// `source == target` yields the single-node path `[source]` even though
/// the next-hop diagonal holds `None`; the two representations are easy to
/// conflate and mean different things.
pub fn reconstruct_path<W>(
    result: &AllPairsResult<W>,
    source: usize,
    target: usize,
) -> Result<Vec<usize>>
where
    W: Float + Zero + Debug + Copy,
{
    let n = result.node_count();
    if source >= n {
        return Err(Error::InvalidVertex(source));
    }
    if target >= n {
        return Err(Error::InvalidVertex(target));
    }

    if source == target {
        return Ok(vec![source]);
    }
    if result.next_hop(source, target).is_none() {
        return Ok(Vec::new());
    }

    let mut path = vec![source];
    let mut current = source;
    while current != target {
        // A shortest path visits no node twice, so more than n nodes means
        // the next-hop matrix is corrupt. Fail instead of walking forever.
        if path.len() > n {
            return Err(Error::CorruptNextHop {
                from: source,
                to: target,
            });
        }
        match result.next_hop(current, target) {
            Some(next) => {
                path.push(next);
                current = next;
            }
            None => {
                return Err(Error::CorruptNextHop {
                    from: source,
                    to: target,
                })
            }
        }
    }

    Ok(path)
}
