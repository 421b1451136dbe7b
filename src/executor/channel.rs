use std::os::fd::{AsRawFd, OwnedFd, RawFd};
use nix::unistd;
use crate::error::ExecError;
use super::spawner::syscall;

/// One pipe between two adjacent stages. An endpoint is `None` once closed;
/// whatever is still open is closed on drop.
#[derive(Debug)]
pub struct Channel {
    read: Option<OwnedFd>,
    write: Option<OwnedFd>,
}

impl Channel {
    pub fn open() -> Result<Self, ExecError> {
        let (read, write) = syscall(unistd::pipe).map_err(ExecError::Channel)?;
        Ok(Channel { read: Some(read), write: Some(write) })
    }

    pub fn read_fd(&self) -> Option<RawFd> {
        self.read.as_ref().map(AsRawFd::as_raw_fd)
    }

    pub fn write_fd(&self) -> Option<RawFd> {
        self.write.as_ref().map(AsRawFd::as_raw_fd)
    }

    pub fn close(&mut self) {
        self.read = None;
        self.write = None;
    }

    pub fn is_closed(&self) -> bool {
        self.read.is_none() && self.write.is_none()
    }
}

/// The `stages - 1` channels of a pipeline. Channel `i` carries the output
/// of stage `i` into stage `i + 1`.
#[derive(Debug)]
pub struct ChannelSet {
    channels: Vec<Channel>,
}

impl ChannelSet {
    /// Opens `count` channels. If one fails, the ones already opened are
    /// dropped and therefore closed.
    pub fn open(count: usize) -> Result<Self, ExecError> {
        let channels = (0..count)
            .map(|_| Channel::open())
            .collect::<Result<Vec<_>, _>>()?;
        Ok(ChannelSet { channels })
    }

    pub fn len(&self) -> usize {
        self.channels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.channels.is_empty()
    }

    /// Read end feeding the stdin of `stage`, if it is not the first one.
    pub fn input_for(&self, stage: usize) -> Option<RawFd> {
        stage.checked_sub(1)
            .and_then(|i| self.channels.get(i))
            .and_then(Channel::read_fd)
    }

    /// Write end taking the stdout of `stage`, if it is not the last one.
    pub fn output_for(&self, stage: usize) -> Option<RawFd> {
        self.channels.get(stage).and_then(Channel::write_fd)
    }

    /// Every endpoint still open, in channel order (read before write).
    pub fn raw_fds(&self) -> Vec<RawFd> {
        self.channels
            .iter()
            .flat_map(|c| [c.read_fd(), c.write_fd()])
            .flatten()
            .collect()
    }

    pub fn close_all(&mut self) {
        for channel in &mut self.channels {
            channel.close();
        }
    }

    pub fn is_closed(&self) -> bool {
        self.channels.iter().all(Channel::is_closed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support;

    fn is_open(fd: RawFd) -> bool {
        unsafe { libc::fcntl(fd, libc::F_GETFD) != -1 }
    }

    #[test]
    fn test_channel_close_releases_fds() {
        let _guard = test_support::serial();
        let mut channel = Channel::open().unwrap();
        let (r, w) = (channel.read_fd().unwrap(), channel.write_fd().unwrap());
        assert!(is_open(r) && is_open(w));
        channel.close();
        assert!(channel.is_closed());
        assert_eq!(channel.read_fd(), None);
        assert!(!is_open(r) && !is_open(w));
    }

    #[test]
    fn test_set_wiring() {
        let _guard = test_support::serial();
        let set = ChannelSet::open(2).unwrap();
        assert_eq!(set.len(), 2);
        assert_eq!(set.input_for(0), None);
        assert_eq!(set.input_for(1), set.channels[0].read_fd());
        assert_eq!(set.input_for(2), set.channels[1].read_fd());
        assert_eq!(set.output_for(0), set.channels[0].write_fd());
        assert_eq!(set.output_for(1), set.channels[1].write_fd());
        assert_eq!(set.output_for(2), None);
        assert_eq!(set.raw_fds().len(), 4);
    }

    #[test]
    fn test_set_drop_closes_everything() {
        let _guard = test_support::serial();
        let set = ChannelSet::open(3).unwrap();
        let fds = set.raw_fds();
        assert!(fds.iter().all(|&fd| is_open(fd)));
        drop(set);
        assert!(fds.iter().all(|&fd| !is_open(fd)));
    }

    #[test]
    fn test_close_all() {
        let _guard = test_support::serial();
        let mut set = ChannelSet::open(2).unwrap();
        set.close_all();
        assert!(set.is_closed());
        assert!(set.raw_fds().is_empty());
        assert_eq!(set.input_for(1), None);
    }

    #[test]
    fn test_zero_channels() {
        let set = ChannelSet::open(0).unwrap();
        assert!(set.is_empty());
        assert!(set.is_closed());
    }
}
