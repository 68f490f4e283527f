//! Theoretical gem catalog and the minimal craft-set search.

use std::cmp::Ordering;

use gemforge_config::CraftConfig;
use gemforge_core::SLOT_CAPACITY;
use smallvec::SmallVec;

/// A gem that could be crafted: only its core point and willpower matter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TheoreticalGem {
    pub core_point: u32,
    pub willpower: u32,
}

impl TheoreticalGem {
    pub const fn new(core_point: u32, willpower: u32) -> Self {
        Self {
            core_point,
            willpower,
        }
    }
}

/// Catalog order: points per willpower desc, core point desc, willpower asc.
fn catalog_order(a: &TheoreticalGem, b: &TheoreticalGem) -> Ordering {
    // a.core / a.will vs b.core / b.will without division
    let ratio_a = u64::from(a.core_point) * u64::from(b.willpower);
    let ratio_b = u64::from(b.core_point) * u64::from(a.willpower);
    ratio_b
        .cmp(&ratio_a)
        .then_with(|| b.core_point.cmp(&a.core_point))
        .then_with(|| a.willpower.cmp(&b.willpower))
}

/// A set of theoretical gems closing a gap.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CraftSet {
    pub gems: Vec<TheoreticalGem>,
    pub total_core_point: u32,
    pub total_willpower: u32,
}

impl CraftSet {
    pub fn len(&self) -> usize {
        self.gems.len()
    }

    pub fn is_empty(&self) -> bool {
        self.gems.is_empty()
    }

    pub fn max_core_point(&self) -> u32 {
        self.gems.iter().map(|g| g.core_point).max().unwrap_or(0)
    }

    /// Returns true if `self` should replace `best`.
    ///
    /// Fewer gems first, then the lowest highest core point, then the lowest
    /// total core point, then the highest total willpower. Full ties keep
    /// `best`.
    fn beats(&self, best: &CraftSet) -> bool {
        self.len()
            .cmp(&best.len())
            .reverse()
            .then_with(|| self.max_core_point().cmp(&best.max_core_point()).reverse())
            .then_with(|| self.total_core_point.cmp(&best.total_core_point).reverse())
            .then_with(|| self.total_willpower.cmp(&best.total_willpower))
            == Ordering::Greater
    }
}

#[derive(Debug, Clone, Copy)]
struct Pick {
    index: usize,
    core_point: u32,
    willpower: u32,
}

/// Every craftable (core point, willpower) pair allowed by configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CraftCatalog {
    min_willpower: u32,
    max_willpower: u32,
    core_points: Vec<u32>,
}

impl CraftCatalog {
    pub fn new(config: &CraftConfig) -> Self {
        let mut core_points = config.core_points.clone();
        core_points.sort_unstable_by(|a, b| b.cmp(a));
        core_points.dedup();
        Self {
            min_willpower: config.min_willpower,
            max_willpower: config.max_willpower,
            core_points,
        }
    }

    /// Lowest willpower any crafted gem costs.
    pub fn min_willpower(&self) -> u32 {
        self.min_willpower
    }

    /// Gems costing at most `available` willpower, in catalog order.
    pub fn options(&self, available: u32) -> Vec<TheoreticalGem> {
        let max = self.max_willpower.min(available);
        let mut options: Vec<TheoreticalGem> = self
            .core_points
            .iter()
            .flat_map(|&core_point| {
                (self.min_willpower..=max).map(move |willpower| TheoreticalGem::new(core_point, willpower))
            })
            .collect();
        options.sort_by(catalog_order);
        options
    }

    /// Finds the best set of at most `slots` theoretical gems, repetition
    /// allowed, reaching `gap` core points within `available` willpower.
    ///
    /// A zero gap is closed by the empty set.
    pub fn find(&self, gap: u32, slots: usize, available: u32) -> Option<CraftSet> {
        if gap == 0 {
            return Some(CraftSet::default());
        }
        let slots = slots.min(SLOT_CAPACITY);
        if slots == 0 || available < self.min_willpower {
            return None;
        }
        let options = self.options(available);
        if options.is_empty() {
            return None;
        }

        let mut best: Option<CraftSet> = None;
        let mut stack: SmallVec<[Pick; SLOT_CAPACITY]> = SmallVec::new();
        let mut next = 0;

        loop {
            if stack.len() < slots && next < options.len() {
                let index = next;
                let option = options[index];
                let (core_point, willpower) = stack
                    .last()
                    .map_or((0, 0), |p| (p.core_point, p.willpower));
                let core_point = core_point + option.core_point;
                let willpower = willpower + option.willpower;

                if willpower > available {
                    next = index + 1;
                    continue;
                }
                if core_point >= gap {
                    // extending a satisfying set only adds gems, so stop here
                    let candidate = CraftSet {
                        gems: stack
                            .iter()
                            .map(|p| options[p.index])
                            .chain(std::iter::once(option))
                            .collect(),
                        total_core_point: core_point,
                        total_willpower: willpower,
                    };
                    if best.as_ref().map_or(true, |b| candidate.beats(b)) {
                        best = Some(candidate);
                    }
                    next = index + 1;
                    continue;
                }

                stack.push(Pick {
                    index,
                    core_point,
                    willpower,
                });
                // repetition: the child may pick the same option again
                next = index;
                continue;
            }

            match stack.pop() {
                Some(pick) => next = pick.index + 1,
                None => break,
            }
        }

        best
    }
}
