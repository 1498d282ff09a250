use std::rc::Rc;
use std::sync::Arc;

pub trait BaseRequest {
    /// The type of successful values from the corresponding response.
    type Ok;
    /// The type of failures from the corresponding response.
    type Error;
}

impl<R> BaseRequest for &R
where
    R: BaseRequest + ?Sized,
{
    type Ok = R::Ok;
    type Error = R::Error;
}

impl<R> BaseRequest for Box<R>
where
    R: BaseRequest + ?Sized,
{
    type Ok = R::Ok;
    type Error = R::Error;
}

impl<R> BaseRequest for Rc<R>
where
    R: BaseRequest + ?Sized,
{
    type Ok = R::Ok;
    type Error = R::Error;
}

impl<R> BaseRequest for Arc<R>
where
    R: BaseRequest + ?Sized,
{
    type Ok = R::Ok;
    type Error = R::Error;
}

/// A request which can be sent through the client `C`, as many times as needed.
///
/// Sending blocks the caller until the response arrives or the request fails.
pub trait Request<C>: BaseRequest {
    fn send(&self, client: C) -> Result<Self::Ok, Self::Error>;
}

impl<R, C> Request<C> for &R
where
    R: Request<C> + ?Sized,
{
    fn send(&self, client: C) -> Result<Self::Ok, Self::Error> {
        (**self).send(client)
    }
}

impl<R, C> Request<C> for Box<R>
where
    R: Request<C> + ?Sized,
{
    fn send(&self, client: C) -> Result<Self::Ok, Self::Error> {
        (**self).send(client)
    }
}

impl<R, C> Request<C> for Rc<R>
where
    R: Request<C> + ?Sized,
{
    fn send(&self, client: C) -> Result<Self::Ok, Self::Error> {
        (**self).send(client)
    }
}

impl<R, C> Request<C> for Arc<R>
where
    R: Request<C> + ?Sized,
{
    fn send(&self, client: C) -> Result<Self::Ok, Self::Error> {
        (**self).send(client)
    }
}
