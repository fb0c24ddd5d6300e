//! Disk compaction over run-length extents instead of individual blocks.

use crate::{Error, Part, Result};
use log::debug;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Extent {
    pos: u64,
    len: u64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct File {
    id: u64,
    extent: Extent,
}

impl File {
    /// `id × (pos + … + pos + len - 1)`
    fn checksum(&self) -> u64 {
        let Extent {pos, len} = self.extent;
        self.id * len * (2 * pos + len).saturating_sub(1) / 2
    }
}

#[derive(Debug, Default)]
struct DiskMap {
    files: Vec<File>,
    gaps: Vec<Extent>,
}

impl DiskMap {
    fn parse(input: &str) -> Result<Self> {
        let mut disk = DiskMap::default();
        let mut pos = 0;
        for (ix, digit) in input.trim().bytes().enumerate() {
            if !digit.is_ascii_digit() {
                return Err(Error::Parse {what: "disk map digit", input: (digit as char).to_string()})
            }
            let extent = Extent {pos, len: (digit - b'0') as u64};
            if ix % 2 == 0 {
                disk.files.push(File {id: ix as u64 / 2, extent});
            } else if extent.len > 0 {
                disk.gaps.push(extent);
            }
            pos += extent.len;
        }
        Ok(disk)
    }

    /// Moves files, highest id first, into gaps left of them. With `whole_files`
    /// a file only moves into a gap that holds all of it; otherwise its blocks
    /// fill gaps one by one from the leftmost and the file may fragment.
    fn compact(&self, whole_files: bool) -> Vec<File> {
        let mut gaps = self.gaps.clone();
        let mut placed = Vec::with_capacity(self.files.len());
        for file in self.files.iter().rev() {
            let mut pending = file.extent.len;
            let min_move = if whole_files {file.extent.len} else {1};
            for gap in gaps.iter_mut().take_while(|gap| gap.pos < file.extent.pos) {
                if pending == 0 {break};
                let moved = pending.min(gap.len);
                if moved < min_move {continue};
                placed.push(File {id: file.id, extent: Extent {pos: gap.pos, len: moved}});
                pending -= moved;
                gap.pos += moved;
                gap.len -= moved;
            }
            if pending > 0 {
                placed.push(File {id: file.id, extent: Extent {pos: file.extent.pos, len: pending}});
            }
            gaps.retain(|gap| gap.len > 0);
        }
        debug!("{} files compacted into {} extents", self.files.len(), placed.len());
        placed
    }
}

pub fn solve(part: Part, input: &str) -> Result<u64> {
    let disk = DiskMap::parse(input)?;
    let files = disk.compact(part == Part::Two);
    Ok(files.iter().map(File::checksum).sum())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "2333133121414131402\n";

    #[test]
    fn block_compaction_checksum() {
        assert_eq!(solve(Part::One, EXAMPLE).unwrap(), 1928);
    }

    #[test]
    fn whole_file_compaction_checksum() {
        assert_eq!(solve(Part::Two, EXAMPLE).unwrap(), 2858);
    }

    #[test]
    fn tiny_disk_fragments_only_by_blocks() {
        // 0..111....22222 compacts to 022111222 blockwise.
        assert_eq!(solve(Part::One, "12345").unwrap(), 60);
        // No gap ever fits file 2 or 1 whole, so nothing moves.
        assert_eq!(solve(Part::Two, "12345").unwrap(), 132);
    }

    #[test]
    fn extent_checksum_matches_block_sum() {
        let file = File {id: 7, extent: Extent {pos: 4, len: 3}};
        assert_eq!(file.checksum(), 7 * (4 + 5 + 6));
        assert_eq!(File {id: 3, extent: Extent {pos: 9, len: 0}}.checksum(), 0);
    }

    #[test]
    fn rejects_non_digits() {
        assert!(matches!(solve(Part::One, "12a4"), Err(Error::Parse {what: "disk map digit", ..})));
    }
}
