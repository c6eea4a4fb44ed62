//! Scoped host subscriptions.
//!
//! Every listener or observer the component attaches is wrapped in a
//! [`Subscription`] whose release action detaches it. Guards are collected in
//! [`Subscriptions`] and released together on teardown, so no callback can
//! fire after the surface is gone.

/// Guard that runs its release action exactly once, on drop at the latest.
pub struct Subscription {
	release: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
	/// Wraps the action that detaches a listener or observer.
	pub fn new(release: impl FnOnce() + 'static) -> Self {
		Self {
			release: Some(Box::new(release)),
		}
	}

	/// Releases now instead of at drop.
	pub fn release(mut self) {
		self.run();
	}

	fn run(&mut self) {
		if let Some(release) = self.release.take() {
			release();
		}
	}
}

impl Drop for Subscription {
	fn drop(&mut self) {
		self.run();
	}
}

/// A bag of subscriptions released as a unit.
#[derive(Default)]
pub struct Subscriptions {
	active: Vec<Subscription>,
}

impl Subscriptions {
	/// Adds a guard; it is released with the rest.
	pub fn push(&mut self, subscription: Subscription) {
		self.active.push(subscription);
	}

	#[cfg(test)]
	fn len(&self) -> usize {
		self.active.len()
	}

	#[cfg(test)]
	fn is_empty(&self) -> bool {
		self.active.is_empty()
	}

	/// Releases every subscription in registration order.
	pub fn release_all(&mut self) {
		for subscription in self.active.drain(..) {
			subscription.release();
		}
	}
}

impl Drop for Subscriptions {
	fn drop(&mut self) {
		self.release_all();
	}
}
